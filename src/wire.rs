use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::{LEGACY_LOG_PATH, LOG_BODY_KEY, LOG_PATH};
use crate::error::Result;
use crate::item::LogRow;

/// Which revision of the service's HTTP contract to speak.
///
/// `Current` posts `{"log": [...]}` to `/log` and accepts quoted response
/// literals. `Legacy` posts the bare item array to `/Api/AddLog` and only
/// accepts the unquoted literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireContract {
    #[default]
    Current,
    Legacy,
}

impl WireContract {
    pub fn path(&self) -> &'static str {
        match self {
            WireContract::Current => LOG_PATH,
            WireContract::Legacy => LEGACY_LOG_PATH,
        }
    }

    pub fn strips_quotes(&self) -> bool {
        matches!(self, WireContract::Current)
    }

    pub fn endpoint(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    /// Serialize a row into the request body for this contract.
    pub fn encode(&self, row: &LogRow) -> Result<Vec<u8>> {
        let body = match self {
            WireContract::Current => serde_json::to_vec(&json!({ LOG_BODY_KEY: row }))?,
            WireContract::Legacy => serde_json::to_vec(row)?,
        };
        Ok(body)
    }
}
