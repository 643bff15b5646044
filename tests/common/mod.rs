//! In-process stand-in for the CloudLogger service.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    routing::post,
    Router,
};
use cloudlogger::{ClientConfig, LogClient, WireContract};
use hyper::Server;
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub secret: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

struct MockState {
    reply: String,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockService {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockService {
    /// Start a service that answers every log request with `reply`.
    pub fn start(reply: &str) -> Self {
        Self::start_inner(reply, None)
    }

    /// Start a service that holds every response back for `delay`.
    pub fn start_stalled(reply: &str, delay: Duration) -> Self {
        Self::start_inner(reply, Some(delay))
    }

    fn start_inner(reply: &str, delay: Option<Duration>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(MockState {
            reply: reply.to_string(),
            delay,
            requests: requests.clone(),
        });

        let app = Router::new()
            .route("/log", post(capture))
            .route("/Api/AddLog", post(capture))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral listener");
        let addr = listener.local_addr().expect("listener address");
        let server = Server::from_tcp(listener)
            .expect("attach listener")
            .serve(app.into_make_service());
        tokio::spawn(async move {
            let _ = server.await;
        });

        Self { addr, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self, secret: &str, throw_on_failure: bool) -> LogClient {
        self.client_with(secret, throw_on_failure, WireContract::Current)
    }

    pub fn client_with(&self, secret: &str, throw_on_failure: bool, contract: WireContract) -> LogClient {
        let config = ClientConfig::builder(secret)
            .base_url(self.base_url())
            .throw_on_failure(throw_on_failure)
            .contract(contract)
            .build()
            .expect("valid config");
        LogClient::new(config).expect("client")
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().await.clone()
    }
}

async fn capture(
    State(state): State<Arc<MockState>>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    };
    state.requests.lock().await.push(CapturedRequest {
        path: uri.path().to_string(),
        secret: header("projectsecret"),
        content_type: header("content-type"),
        body,
    });
    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }
    state.reply.clone()
}

/// An address nothing is listening on.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
