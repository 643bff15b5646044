use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::{LogError, Result};
use crate::wire::WireContract;

/// Transport settings for a [`LogClient`](crate::client::LogClient).
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    pub secret: String,
    pub base_url: String,
    pub throw_on_failure: bool,
    pub contract: WireContract,
    /// `None` leaves the timeout to the HTTP client's own defaults.
    pub timeout: Option<Duration>,
}

// Keeps the secret out of logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("throw_on_failure", &self.throw_on_failure)
            .field("contract", &self.contract)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            throw_on_failure: false,
            contract: WireContract::default(),
            timeout: None,
        }
    }

    pub fn builder(secret: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder {
            config: Self::new(secret),
        }
    }

    /// Parse a TOML table supplied by the host application.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| LogError::Config(format!("Failed to parse client config: {}", e)))?;

        let mut builder = Self::builder(file.secret)
            .throw_on_failure(file.throw_on_failure)
            .contract(file.contract);
        if let Some(base_url) = file.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(ms) = file.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        builder.build()
    }

    pub fn endpoint(&self) -> String {
        self.contract.endpoint(&self.base_url)
    }
}

pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn throw_on_failure(mut self, throw_on_failure: bool) -> Self {
        self.config.throw_on_failure = throw_on_failure;
        self
    }

    pub fn contract(mut self, contract: WireContract) -> Self {
        self.config.contract = contract;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ClientConfig> {
        let base_url = &self.config.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(LogError::Config(format!(
                "base_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }
        Ok(self.config)
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    secret: String,
    base_url: Option<String>,
    #[serde(default)]
    throw_on_failure: bool,
    #[serde(default)]
    contract: WireContract,
    timeout_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("abc123");
        assert_eq!(config.base_url, "https://api.cloudlogger.app");
        assert!(!config.throw_on_failure);
        assert_eq!(config.contract, WireContract::Current);
        assert_eq!(config.timeout, None);
        assert_eq!(config.endpoint(), "https://api.cloudlogger.app/log");
    }

    #[test]
    fn test_builder_trims_base_url() {
        let config = ClientConfig::builder("abc123")
            .base_url("http://127.0.0.1:9000/")
            .contract(WireContract::Legacy)
            .build()
            .unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:9000/Api/AddLog");
    }

    #[test]
    fn test_builder_rejects_non_http_url() {
        let err = ClientConfig::builder("abc123")
            .base_url("ftp://example.com")
            .build()
            .unwrap_err();
        assert!(matches!(err, LogError::Config(_)));
    }

    #[test]
    fn test_from_toml() {
        let config = ClientConfig::from_toml_str(
            r#"
            secret = "abc123"
            base_url = "http://localhost:8080"
            throw_on_failure = true
            contract = "legacy"
            timeout_ms = 2500
            "#,
        )
        .unwrap();

        assert_eq!(config.secret, "abc123");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.throw_on_failure);
        assert_eq!(config.contract, WireContract::Legacy);
        assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
    }

    #[test]
    fn test_from_toml_minimal() {
        let config = ClientConfig::from_toml_str(r#"secret = "abc123""#).unwrap();
        assert_eq!(config, ClientConfig::new("abc123"));
    }

    #[test]
    fn test_from_toml_missing_secret() {
        let err = ClientConfig::from_toml_str("throw_on_failure = true").unwrap_err();
        assert!(matches!(err, LogError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", ClientConfig::new("abc123"));
        assert!(!rendered.contains("abc123"));
    }
}
