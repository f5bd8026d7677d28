//! Wire structures returned by the backend on failure

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Error body produced by the backend
///
/// Field-level validation failures arrive as `messages`, every other failure
/// carries a single `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub messages: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub trace_id: Option<String>,
}

impl ErrorBody {
    /// Parse a response body, falling back to an empty body for non-JSON text
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
