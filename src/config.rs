//! Operator-supplied dispatch configuration.
//!
//! The host deserializes this once at initialization time from persisted
//! configuration. Absent or malformed configuration falls back to the
//! built-in defaults without aborting initialization; the fallback is logged
//! so operators can spot a broken config blob.

use serde::{Deserialize, Serialize};
use tracing::error;

/// Transport and command tuning passed through to the remote-service client.
///
/// `command_max_concurrency` and `command_max_errors` are percentage or
/// absolute count strings interpreted by the remote service, not locally
/// (e.g. `"50"` meaning 50% of targets in parallel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Retry budget delegated to the remote-service client; no local retry
    /// loop exists on top of it.
    pub client_max_retries: u32,
    pub client_connect_timeout_seconds: u64,
    pub client_read_write_timeout_seconds: u64,
    pub command_max_concurrency: String,
    pub command_max_errors: String,
    /// Deadline after which an unstarted issued command is abandoned by the
    /// remote service.
    pub command_timeout_seconds: i32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            client_max_retries: 4,
            client_connect_timeout_seconds: 100,
            client_read_write_timeout_seconds: 300,
            command_max_concurrency: "50".to_string(),
            command_max_errors: "0".to_string(),
            command_timeout_seconds: 30,
        }
    }
}

impl DispatchConfig {
    /// Parse a host-persisted JSON blob, falling back to defaults when the
    /// blob is absent, empty, or malformed.
    pub fn from_json_or_default(values: Option<&str>) -> Self {
        let Some(raw) = values.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(source) => {
                error!(
                    error = %source,
                    "Encountered error while deserializing dispatch config, using defaults"
                );
                Self::default()
            }
        }
    }
}
