//! Command dispatch.
//!
//! Orchestrates a single remote call: builds the client settings, resolves
//! credentials, branches exhaustively on the command type, awaits the network
//! round trip, and normalizes the provider response. The two branches share
//! client construction and error handling but diverge entirely in
//! request/response shape, so they are dispatched as a closed union rather
//! than through a shared polymorphic call.
//!
//! The dispatcher never panics across this boundary: it returns either a
//! populated [`CommandResult`] or a [`DispatchError`] for the controller to
//! convert into a Failed terminal state. Provider faults with a recognized
//! error code are mapped through the classifier before they surface; raw
//! provider text is only used for unrecognized codes.

use crate::classifier;
use crate::config::DispatchConfig;
use crate::error::{DispatchError, Result};
use crate::service::{
    ClientSettings, CredentialResolver, InvocationQuery, ProviderFault, RemoteCommandService,
    SendCommandCall,
};
use crate::types::{CommandRequest, CommandResult, CommandType};
use std::sync::Arc;
use tracing::{debug, warn};

/// Dispatches one validated request against the remote service.
///
/// Holds only shared read-only collaborators, so a single dispatcher can be
/// reused across concurrent executions.
pub struct CommandDispatcher {
    service: Arc<dyn RemoteCommandService>,
    credentials: Arc<dyn CredentialResolver>,
}

impl CommandDispatcher {
    pub fn new(
        service: Arc<dyn RemoteCommandService>,
        credentials: Arc<dyn CredentialResolver>,
    ) -> Self {
        Self {
            service,
            credentials,
        }
    }

    /// Execute the remote operation for an already-validated request.
    ///
    /// The only await points are the two service calls; no other work is
    /// blocked while the network round trip is in flight.
    pub async fn dispatch(
        &self,
        request: &CommandRequest,
        command_type: CommandType,
        config: &DispatchConfig,
    ) -> Result<CommandResult> {
        // Validation guarantees region and role are present past this point.
        let region = request.region.as_deref().unwrap_or_default();
        let role = request.authority_role.as_deref().unwrap_or_default();
        let settings = ClientSettings::from_config(config, region);

        let credentials = self.credentials.resolve(role).ok_or_else(|| {
            warn!(role = %role, "No usable credentials resolved for authority role");
            DispatchError::CredentialsNotFound
        })?;

        match command_type {
            CommandType::SendCommand => {
                let call = SendCommandCall {
                    document: request.command_document.clone().unwrap_or_default(),
                    instance_ids: vec![request.instance_id.clone().unwrap_or_default()],
                    max_concurrency: config.command_max_concurrency.clone(),
                    max_errors: config.command_max_errors.clone(),
                    timeout_seconds: config.command_timeout_seconds,
                    comment: request.command_comment.clone().unwrap_or_default(),
                    parameters: request.command_parameters.clone().unwrap_or_default(),
                };
                debug!(
                    document = %call.document,
                    region = %settings.region,
                    "Issuing command"
                );
                let issued = self
                    .service
                    .send_command(&settings, &credentials, call)
                    .await
                    .map_err(classify_fault)?;

                let mut result = CommandResult::complete();
                result.command_id = Some(issued.command_id);
                result.command_status = Some(issued.status_details);
                result.command_comment = Some(issued.comment);
                Ok(result)
            }
            CommandType::GetCommandInvocation => {
                let query = InvocationQuery {
                    command_id: request.command_id.clone().unwrap_or_default(),
                    instance_id: request.instance_id.clone().unwrap_or_default(),
                    details: true,
                };
                debug!(
                    command_id = %query.command_id,
                    region = %settings.region,
                    "Polling command invocations"
                );
                let invocations = self
                    .service
                    .list_command_invocations(&settings, &credentials, query)
                    .await
                    .map_err(classify_fault)?;

                // Zero matches is a recoverable failure, not a fault.
                let Some(invocation) = invocations.into_iter().next() else {
                    return Err(DispatchError::InvocationNotFound);
                };

                let mut result = CommandResult::complete();
                result.command_id = Some(invocation.command_id.clone());
                result.command_status = Some(invocation.status_details.clone());
                result.command_comment = Some(invocation.comment.clone());
                if invocation.is_success() {
                    if let Some(plugin) = invocation.plugin_outputs.first() {
                        result.standard_output = Some(plugin.output.clone());
                        result.standard_error = plugin.error_output.clone();
                    }
                }
                Ok(result)
            }
        }
    }
}

fn classify_fault(fault: ProviderFault) -> DispatchError {
    match fault.code {
        Some(code) => DispatchError::Provider(classifier::classify(&code, &fault.message)),
        None => DispatchError::Unclassified(fault.message),
    }
}
