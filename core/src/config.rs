//! Transport configuration.
//!
//! Settings are passed explicitly to `UreqTransport::new` rather than
//! mutated on a shared client. Loading them from a file is the caller's
//! job; `from_json` only parses a document already in memory.

use serde::{Deserialize, Serialize};

use crate::error::ZoneError;

/// Connection settings for the management API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransportConfig {
    /// Scheme and host of the device, e.g. `https://192.0.2.1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// REST API token, sent as a bearer token when present.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Virtual domain every request is scoped to.
    #[serde(default)]
    pub vdom: Option<String>,
    /// Extra attempts after a request fails to send.
    #[serde(default = "default_retries")]
    pub retries: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Skip TLS certificate verification (devices commonly ship self-signed).
    #[serde(default)]
    pub insecure: bool,
}

fn default_base_url() -> String {
    "https://127.0.0.1".to_string()
}

fn default_retries() -> u32 {
    1
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_token: None,
            vdom: None,
            retries: default_retries(),
            timeout_secs: default_timeout_secs(),
            insecure: false,
        }
    }
}

impl TransportConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ZoneError> {
        serde_json::from_str(raw).map_err(|e| ZoneError::Validation(format!("invalid transport config: {e}")))
    }
}
