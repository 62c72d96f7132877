//! The remote service boundary.
//!
//! The fleet-management API and the credential store are external
//! collaborators; this module specifies them as capabilities only. The host
//! supplies production implementations backed by the real SDK client, and
//! tests supply scripted doubles. Implementations must be `Send + Sync` so a
//! single handle can serve concurrent executions.

use crate::config::DispatchConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// Resolved credentials for one authority role. Opaque to the core; only the
/// service implementation interprets the key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

/// Resolves an authority role to usable credentials via the host's profile
/// store. Returns `None` when the role cannot be resolved.
pub trait CredentialResolver: Send + Sync {
    fn resolve(&self, role: &str) -> Option<AwsCredentials>;
}

/// Transport settings for one remote call, built from [`DispatchConfig`] and
/// the request's region. Passed through to the client unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub max_retries: u32,
    pub connect_timeout: Duration,
    pub read_write_timeout: Duration,
    pub region: String,
}

impl ClientSettings {
    pub fn from_config(config: &DispatchConfig, region: &str) -> Self {
        Self {
            max_retries: config.client_max_retries,
            connect_timeout: Duration::from_secs(config.client_connect_timeout_seconds),
            read_write_timeout: Duration::from_secs(config.client_read_write_timeout_seconds),
            region: region.to_string(),
        }
    }
}

/// A single-target issue-command call.
#[derive(Debug, Clone, PartialEq)]
pub struct SendCommandCall {
    pub document: String,
    pub instance_ids: Vec<String>,
    pub max_concurrency: String,
    pub max_errors: String,
    pub timeout_seconds: i32,
    pub comment: String,
    pub parameters: HashMap<String, Vec<String>>,
}

/// A status query scoped to one command id and instance, requesting
/// per-target detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationQuery {
    pub command_id: String,
    pub instance_id: String,
    pub details: bool,
}

/// The provider's acknowledgement of an issued command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedCommand {
    pub command_id: String,
    pub status_details: String,
    pub comment: String,
}

/// Captured output of one execution step within an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginOutput {
    pub output: String,
    /// Captured standard error, when the provider recorded it separately.
    pub error_output: Option<String>,
}

/// One per-target invocation record returned by the status query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    pub command_id: String,
    pub instance_id: String,
    pub status_details: String,
    pub comment: String,
    pub plugin_outputs: Vec<PluginOutput>,
}

impl CommandInvocation {
    /// Whether the provider reports this invocation as having succeeded.
    pub fn is_success(&self) -> bool {
        self.status_details == "Success"
    }
}

/// A fault raised by the remote service or its transport. `code` is set for
/// service-level faults carrying a provider error code; transport and
/// serialization faults leave it unset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderFault {
    pub code: Option<String>,
    pub message: String,
}

impl ProviderFault {
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

/// The fleet-management API surface used by the dispatcher.
#[async_trait]
pub trait RemoteCommandService: Send + Sync {
    /// Issue a document execution against the targeted instances.
    async fn send_command(
        &self,
        settings: &ClientSettings,
        credentials: &AwsCredentials,
        call: SendCommandCall,
    ) -> std::result::Result<IssuedCommand, ProviderFault>;

    /// List the per-target invocation records of a previously issued command.
    async fn list_command_invocations(
        &self,
        settings: &ClientSettings,
        credentials: &AwsCredentials,
        query: InvocationQuery,
    ) -> std::result::Result<Vec<CommandInvocation>, ProviderFault>;
}
