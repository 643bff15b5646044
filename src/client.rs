use once_cell::sync::OnceCell;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use std::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::constants::SECRET_HEADER;
use crate::error::{LogError, Result};
use crate::item::LogRow;
use crate::response::ResponseCode;
use crate::wire::WireContract;

static GLOBAL: OnceCell<LogClient> = OnceCell::new();

/// Sends log rows to the CloudLogger service.
///
/// The underlying HTTP client is built once and shared by every call. The
/// project secret can be rotated at any time with [`LogClient::update_secret`];
/// requests already in flight keep the secret they were built with.
#[derive(Debug)]
pub struct LogClient {
    http: reqwest::Client,
    secret: RwLock<HeaderValue>,
    base_url: String,
    endpoint: String,
    contract: WireContract,
    throw_on_failure: bool,
}

impl LogClient {
    /// Build an independent client from `config`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let secret = secret_header(&config.secret)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            secret: RwLock::new(secret),
            endpoint: config.endpoint(),
            base_url: config.base_url,
            contract: config.contract,
            throw_on_failure: config.throw_on_failure,
        })
    }

    /// Create the process-wide client against the hosted service, or return
    /// the existing one. Arguments of every call after the first successful
    /// one are ignored.
    pub fn initialize(secret: &str, throw_on_failure: bool) -> Result<&'static LogClient> {
        let config = ClientConfig::builder(secret)
            .throw_on_failure(throw_on_failure)
            .build()?;
        Self::initialize_with(config)
    }

    /// Same as [`LogClient::initialize`] with a full configuration.
    pub fn initialize_with(config: ClientConfig) -> Result<&'static LogClient> {
        if let Some(existing) = GLOBAL.get() {
            debug!("CloudLogger client already initialized, ignoring new configuration");
            return Ok(existing);
        }
        GLOBAL.get_or_try_init(|| {
            let client = LogClient::new(config)?;
            info!(endpoint = %client.endpoint, "Initialized CloudLogger client");
            Ok(client)
        })
    }

    /// The process-wide client, if one has been initialized.
    pub fn global() -> Option<&'static LogClient> {
        GLOBAL.get()
    }

    /// Replace the secret sent with every subsequent request.
    pub fn update_secret(&self, secret: &str) -> Result<()> {
        let value = secret_header(secret)?;
        *self.secret.write().unwrap_or_else(|e| e.into_inner()) = value;
        info!("Updated CloudLogger project secret");
        Ok(())
    }

    /// Submit one row and report exactly what happened.
    ///
    /// Every failure is returned, regardless of the configured policy.
    #[instrument(skip_all, fields(items = row.len()))]
    pub async fn send(&self, row: &LogRow) -> Result<ResponseCode> {
        let body = self.contract.encode(row)?;
        let secret = self.current_secret();

        debug!("POST {} ({} bytes)", self.endpoint, body.len());
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(SECRET_HEADER, secret)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = status.as_u16(), "CloudLogger responded: {}", text.trim());

        ResponseCode::decode(&text, self.contract)?.into_result()
    }

    /// Submit one row, applying the failure policy.
    ///
    /// `throw_on_failure` overrides the client default for this call. When
    /// the effective policy is `false` every failure is logged and dropped.
    pub async fn log(&self, row: &LogRow, throw_on_failure: Option<bool>) -> Result<()> {
        let throw = throw_on_failure.unwrap_or(self.throw_on_failure);
        match self.send(row).await {
            Ok(_) => Ok(()),
            Err(e) if throw => Err(e),
            Err(e) => {
                warn!("CloudLogger: dropping log row after failure: {}", e);
                Ok(())
            }
        }
    }

    /// Submit one row under the client's default failure policy.
    pub async fn log_default(&self, row: &LogRow) -> Result<()> {
        self.log(row, None).await
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL rows are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Wire contract in use.
    pub fn contract(&self) -> WireContract {
        self.contract
    }

    /// Default failure policy for [`LogClient::log`].
    pub fn throw_on_failure(&self) -> bool {
        self.throw_on_failure
    }

    fn current_secret(&self) -> HeaderValue {
        self.secret.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

fn secret_header(secret: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(secret)
        .map_err(|e| LogError::InvalidSecret(e.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}
