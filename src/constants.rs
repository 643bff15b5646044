//! Fixed values of the CloudLogger wire contract.

/// Base URL of the hosted logging service
pub const DEFAULT_BASE_URL: &str = "https://api.cloudlogger.app";

// Endpoint paths, appended to the base URL
pub const LOG_PATH: &str = "/log";
pub const LEGACY_LOG_PATH: &str = "/Api/AddLog";

/// Header carrying the project secret on every request
pub const SECRET_HEADER: &str = "ProjectSecret";

// Response literals returned by the service
pub const RESPONSE_SUCCESS: &str = "Success";
pub const RESPONSE_SECRET_FAILURE: &str = "SecretFailure";
pub const RESPONSE_SERVER_FAILURE: &str = "ServerFailure";

/// Top-level key wrapping the row in the current request body
pub const LOG_BODY_KEY: &str = "log";
