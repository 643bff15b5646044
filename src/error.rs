use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("SecretFailure: CloudLogger project secret is invalid")]
    Authentication,

    #[error("ServerFailure: CloudLogger server encountered an error")]
    RemoteServer,

    #[error("Unrecognized CloudLogger response: {body}")]
    Protocol { body: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Project secret is not a valid header value: {0}")]
    InvalidSecret(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LogError {
    /// Errors the caller can only fix by changing the client setup.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LogError::Authentication | LogError::InvalidSecret(_) | LogError::Config(_)
        )
    }

    /// Errors caused by infrastructure that may succeed on a later attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, LogError::RemoteServer | LogError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
