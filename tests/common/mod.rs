//! Shared test doubles and builders for the dispatch integration tests.
//!
//! Mirrors the production collaborators with scripted, call-recording
//! implementations so tests can assert on what crossed the remote boundary
//! without a real fleet-management service.
#![allow(dead_code)] // each test binary uses its own subset of these helpers

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ssm_dispatch::controller::{ExecutionContext, ExecutionObserver};
use ssm_dispatch::error::DispatchError;
use ssm_dispatch::lifecycle::{ExecutionStatus, LogLevel};
use ssm_dispatch::service::{
    AwsCredentials, ClientSettings, CommandInvocation, CredentialResolver, InvocationQuery,
    IssuedCommand, PluginOutput, ProviderFault, RemoteCommandService, SendCommandCall,
};
use ssm_dispatch::types::CommandRequest;

/// Everything the mock service observed and will answer with.
#[derive(Debug, Clone, Default)]
pub struct MockServiceState {
    pub send_calls: Vec<SendCommandCall>,
    pub list_calls: Vec<InvocationQuery>,
    pub settings_seen: Vec<ClientSettings>,
}

/// Scripted remote service double with call recording.
pub struct MockSsmService {
    state: Arc<Mutex<MockServiceState>>,
    send_response: Result<IssuedCommand, ProviderFault>,
    list_response: Result<Vec<CommandInvocation>, ProviderFault>,
}

impl MockSsmService {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockServiceState::default())),
            send_response: Ok(issued_command("cmd-0001")),
            list_response: Ok(vec![]),
        }
    }

    /// Script the send-command acknowledgement.
    pub fn with_issued(mut self, issued: IssuedCommand) -> Self {
        self.send_response = Ok(issued);
        self
    }

    /// Script the invocation records returned by the status query.
    pub fn with_invocations(mut self, invocations: Vec<CommandInvocation>) -> Self {
        self.list_response = Ok(invocations);
        self
    }

    /// Script a provider fault for both operations.
    pub fn with_fault(mut self, fault: ProviderFault) -> Self {
        self.send_response = Err(fault.clone());
        self.list_response = Err(fault);
        self
    }

    /// Shared handle onto the recorded state, usable after the service has
    /// been moved behind an `Arc<dyn RemoteCommandService>`.
    pub fn state(&self) -> Arc<Mutex<MockServiceState>> {
        Arc::clone(&self.state)
    }
}

#[async_trait]
impl RemoteCommandService for MockSsmService {
    async fn send_command(
        &self,
        settings: &ClientSettings,
        _credentials: &AwsCredentials,
        call: SendCommandCall,
    ) -> Result<IssuedCommand, ProviderFault> {
        let mut state = self.state.lock().unwrap();
        state.settings_seen.push(settings.clone());
        state.send_calls.push(call);
        self.send_response.clone()
    }

    async fn list_command_invocations(
        &self,
        settings: &ClientSettings,
        _credentials: &AwsCredentials,
        query: InvocationQuery,
    ) -> Result<Vec<CommandInvocation>, ProviderFault> {
        let mut state = self.state.lock().unwrap();
        state.settings_seen.push(settings.clone());
        state.list_calls.push(query);
        self.list_response.clone()
    }
}

/// Resolver that knows a fixed set of roles.
pub struct StaticCredentialResolver {
    roles: Vec<String>,
}

impl StaticCredentialResolver {
    pub fn with_role(role: &str) -> Self {
        Self {
            roles: vec![role.to_string()],
        }
    }

    pub fn empty() -> Self {
        Self { roles: vec![] }
    }
}

impl CredentialResolver for StaticCredentialResolver {
    fn resolve(&self, role: &str) -> Option<AwsCredentials> {
        if self.roles.iter().any(|known| known == role) {
            Some(AwsCredentials {
                access_key_id: "AKIATESTACCESSKEY".to_string(),
                secret_access_key: "test-secret".to_string(),
                session_token: None,
            })
        } else {
            None
        }
    }
}

/// One recorded progress checkpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    pub message: String,
    pub status: ExecutionStatus,
    pub sequence: u64,
}

/// One recorded log callback.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub message: String,
    pub level: LogLevel,
    pub error: Option<DispatchError>,
}

/// Observer double recording every host callback in order.
#[derive(Default)]
pub struct RecordingObserver {
    pub progress: Mutex<Vec<ProgressEvent>>,
    pub logs: Mutex<Vec<LogEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress_events(&self) -> Vec<ProgressEvent> {
        self.progress.lock().unwrap().clone()
    }

    pub fn log_events(&self) -> Vec<LogEvent> {
        self.logs.lock().unwrap().clone()
    }
}

impl ExecutionObserver for RecordingObserver {
    fn report_progress(
        &self,
        _context: &ExecutionContext,
        message: &str,
        status: ExecutionStatus,
        sequence: u64,
    ) {
        self.progress.lock().unwrap().push(ProgressEvent {
            message: message.to_string(),
            status,
            sequence,
        });
    }

    fn report_log(
        &self,
        _context: &ExecutionContext,
        message: &str,
        level: LogLevel,
        error: Option<&DispatchError>,
    ) {
        self.logs.lock().unwrap().push(LogEvent {
            message: message.to_string(),
            level,
            error: error.cloned(),
        });
    }
}

pub fn issued_command(command_id: &str) -> IssuedCommand {
    IssuedCommand {
        command_id: command_id.to_string(),
        status_details: "Pending".to_string(),
        comment: "hostname probe".to_string(),
    }
}

pub fn invocation(command_id: &str, status_details: &str, outputs: &[&str]) -> CommandInvocation {
    CommandInvocation {
        command_id: command_id.to_string(),
        instance_id: "i-12345678".to_string(),
        status_details: status_details.to_string(),
        comment: "hostname probe".to_string(),
        plugin_outputs: outputs
            .iter()
            .map(|output| PluginOutput {
                output: (*output).to_string(),
                error_output: None,
            })
            .collect(),
    }
}

pub fn valid_send_request() -> CommandRequest {
    CommandRequest {
        instance_id: Some("i-12345678".to_string()),
        command_type: Some("send-command".to_string()),
        command_document: Some("AWS-RunPowerShellScript".to_string()),
        command_parameters: Some(HashMap::from([(
            "commands".to_string(),
            vec!["$env:computername".to_string()],
        )])),
        command_comment: Some("hostname probe".to_string()),
        region: Some("eu-west-1".to_string()),
        authority_role: Some("ops-automation".to_string()),
        ..Default::default()
    }
}

pub fn valid_poll_request() -> CommandRequest {
    CommandRequest {
        instance_id: Some("i-12345678".to_string()),
        command_type: Some("get-command-invocation".to_string()),
        command_id: Some("cmd-0001".to_string()),
        region: Some("eu-west-1".to_string()),
        authority_role: Some("ops-automation".to_string()),
        ..Default::default()
    }
}
