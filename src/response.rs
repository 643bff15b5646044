use std::fmt;
use std::str::FromStr;

use crate::constants::{RESPONSE_SECRET_FAILURE, RESPONSE_SERVER_FAILURE, RESPONSE_SUCCESS};
use crate::error::LogError;
use crate::wire::WireContract;

/// The service's verdict on a submitted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    SecretFailure,
    ServerFailure,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::Success => RESPONSE_SUCCESS,
            ResponseCode::SecretFailure => RESPONSE_SECRET_FAILURE,
            ResponseCode::ServerFailure => RESPONSE_SERVER_FAILURE,
        }
    }

    /// Decode a raw response body under the given contract.
    ///
    /// Matching is case-sensitive. The current contract tolerates the literal
    /// being wrapped in JSON string quotes; the legacy one does not.
    pub fn decode(body: &str, contract: WireContract) -> Result<Self, LogError> {
        let trimmed = body.trim();
        let literal = if contract.strips_quotes() {
            trimmed.trim_matches('"').trim()
        } else {
            trimmed
        };
        literal.parse().map_err(|_| LogError::Protocol {
            body: body.to_string(),
        })
    }

    /// Map a decoded code onto the error taxonomy.
    pub fn into_result(self) -> Result<Self, LogError> {
        match self {
            ResponseCode::Success => Ok(self),
            ResponseCode::SecretFailure => Err(LogError::Authentication),
            ResponseCode::ServerFailure => Err(LogError::RemoteServer),
        }
    }
}

impl FromStr for ResponseCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RESPONSE_SUCCESS => Ok(ResponseCode::Success),
            RESPONSE_SECRET_FAILURE => Ok(ResponseCode::SecretFailure),
            RESPONSE_SERVER_FAILURE => Ok(ResponseCode::ServerFailure),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
