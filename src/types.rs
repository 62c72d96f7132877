//! Core request and response types for the dispatch adapter.
//!
//! [`CommandRequest`] is the host-deserialized intent, [`CommandResult`] the
//! normalized outcome handed back as exit data. The two supported intents are
//! a closed union, [`CommandType`], so branch dispatch is exhaustive and
//! adding a third command type is a compile-time-checked change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The two remote operations the adapter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandType {
    /// Issue a document/script execution against a target instance
    SendCommand,
    /// Poll the status and output of a previously issued command
    GetCommandInvocation,
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SendCommand => write!(f, "send-command"),
            Self::GetCommandInvocation => write!(f, "get-command-invocation"),
        }
    }
}

impl std::str::FromStr for CommandType {
    type Err = String;

    /// Case-insensitive over the wire forms `send-command` and
    /// `get-command-invocation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "send-command" => Ok(Self::SendCommand),
            "get-command-invocation" => Ok(Self::GetCommandInvocation),
            _ => Err(format!("Invalid command type: {s}")),
        }
    }
}

/// A remote-execution intent as deserialized by the host.
///
/// Every field is optional at this layer: the host may hand over a default
/// value when the parameter payload was absent or empty, and that case must
/// flow into validation rather than fault. Within each parameter list the
/// value order is significant (it becomes argument order); key order is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandRequest {
    pub instance_id: Option<String>,
    pub command_type: Option<String>,
    pub command_id: Option<String>,
    pub command_document: Option<String>,
    pub command_parameters: Option<HashMap<String, Vec<String>>>,
    pub command_comment: Option<String>,
    pub region: Option<String>,
    pub authority_role: Option<String>,
}

impl CommandRequest {
    /// True when no field carries a value, i.e. the host deserialized an
    /// absent or empty payload.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Terminal outcome of a single dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultStatus {
    Complete,
    Failed,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Normalized response returned to the host as exit data.
///
/// Invariants: a `Complete` result never carries an `error_message`;
/// `standard_output` / `standard_error` are only populated for successful
/// poll operations whose underlying invocation succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub status: ResultStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error: Option<String>,
    /// Human-readable one-line outcome, always set by the controller.
    pub summary: String,
}

impl CommandResult {
    /// A completed result with no remote payload yet; the dispatcher fills in
    /// the echoed identifiers, the controller fills in the summary.
    pub fn complete() -> Self {
        Self {
            status: ResultStatus::Complete,
            command_id: None,
            command_status: None,
            command_comment: None,
            error_message: None,
            standard_output: None,
            standard_error: None,
            summary: String::new(),
        }
    }

    /// A failed result carrying the classified or derived error message.
    pub fn failed(error_message: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            status: ResultStatus::Failed,
            command_id: None,
            command_status: None,
            command_comment: None,
            error_message: Some(error_message.into()),
            standard_output: None,
            standard_error: None,
            summary: summary.into(),
        }
    }
}
