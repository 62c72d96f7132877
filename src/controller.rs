//! Top-level execution control.
//!
//! The controller owns the progress lifecycle for exactly one request: it
//! emits the fixed checkpoints to the host's sinks, sequences the
//! validate-then-dispatch pipeline, short-circuits dry runs after validation,
//! and is the single place where any fault is converted into a Failed
//! terminal state. Nothing below this boundary is allowed to escape as an
//! uncaught fault; the host always observes a terminal checkpoint and a
//! report with a non-empty summary.

use crate::config::DispatchConfig;
use crate::dispatcher::CommandDispatcher;
use crate::error::{DispatchError, Result};
use crate::lifecycle::{ExecutionLifecycle, ExecutionStatus, LogLevel, FINAL_SEQUENCE};
use crate::types::{CommandRequest, CommandResult};
use crate::validation::validate_request;
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Correlation data passed to every observer callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Unique id for this execution, for host-side correlation.
    pub execution_id: Uuid,
    /// The controller activity emitting the callback.
    pub activity: &'static str,
}

impl ExecutionContext {
    fn new() -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            activity: "execute",
        }
    }
}

/// The hosting runtime's progress and log sinks.
///
/// Checkpoints are reported before and independent of the returned
/// [`ExecutionReport`]; a host that never inspects the return value still
/// observes the full lifecycle.
pub trait ExecutionObserver: Send + Sync {
    fn report_progress(
        &self,
        context: &ExecutionContext,
        message: &str,
        status: ExecutionStatus,
        sequence: u64,
    );

    fn report_log(
        &self,
        context: &ExecutionContext,
        message: &str,
        level: LogLevel,
        error: Option<&DispatchError>,
    );
}

/// Final lifecycle result returned to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReport {
    pub status: ExecutionStatus,
    pub sequence: u64,
    /// The normalized command result, or `None` for a dry run.
    pub exit_data: Option<CommandResult>,
}

/// Entry point for one request lifecycle.
pub struct ExecutionController {
    dispatcher: CommandDispatcher,
    config: DispatchConfig,
}

impl ExecutionController {
    pub fn new(dispatcher: CommandDispatcher, config: DispatchConfig) -> Self {
        Self { dispatcher, config }
    }

    /// Run one request end-to-end. An absent request is treated as an empty
    /// one and rejected by validation rather than faulting.
    #[instrument(skip(self, request, observer))]
    pub async fn execute(
        &self,
        request: Option<CommandRequest>,
        dry_run: bool,
        observer: &dyn ExecutionObserver,
    ) -> ExecutionReport {
        let context = ExecutionContext::new();
        let mut lifecycle = ExecutionLifecycle::new();

        let outcome = self
            .run(&context, &mut lifecycle, observer, request, dry_run)
            .await;

        let (terminal_status, final_message, exit_data) = match outcome {
            Ok(Some(result)) => {
                let message = result.summary.clone();
                (ExecutionStatus::Complete, message, Some(result))
            }
            Ok(None) => (
                ExecutionStatus::Complete,
                "Dry run execution is completed.".to_string(),
                None,
            ),
            Err(dispatch_error) => {
                let message = format!("Execution has been aborted due to: {dispatch_error}");
                let result = CommandResult::failed(dispatch_error.to_string(), message.clone());
                error!(
                    execution_id = %context.execution_id,
                    error = %dispatch_error,
                    "Execution aborted"
                );
                observer.report_log(&context, &message, LogLevel::Error, Some(&dispatch_error));
                (ExecutionStatus::Failed, message, Some(result))
            }
        };

        // The run body always reaches Running before it can fail, so this
        // transition only errors on a controller bug; it is logged, not raised.
        if let Err(transition_error) = lifecycle.transition(terminal_status) {
            error!(
                execution_id = %context.execution_id,
                error = %transition_error,
                "Lifecycle refused terminal transition"
            );
        }
        lifecycle.final_checkpoint(&final_message);
        observer.report_progress(&context, &final_message, terminal_status, FINAL_SEQUENCE);
        if terminal_status == ExecutionStatus::Complete {
            observer.report_log(&context, &final_message, LogLevel::Info, None);
        }

        info!(
            execution_id = %context.execution_id,
            status = %terminal_status,
            "Execution finished"
        );

        ExecutionReport {
            status: terminal_status,
            sequence: FINAL_SEQUENCE,
            exit_data,
        }
    }

    async fn run(
        &self,
        context: &ExecutionContext,
        lifecycle: &mut ExecutionLifecycle,
        observer: &dyn ExecutionObserver,
        request: Option<CommandRequest>,
        dry_run: bool,
    ) -> Result<Option<CommandResult>> {
        self.checkpoint(context, lifecycle, observer, "Parsing incoming request...")?;
        let request = request.unwrap_or_default();

        let executing = if dry_run {
            "Executing request in dry run mode..."
        } else {
            "Executing request..."
        };
        self.checkpoint(context, lifecycle, observer, executing)?;

        let command_type = validate_request(&request)?;

        if dry_run {
            return Ok(None);
        }

        let mut result = self
            .dispatcher
            .dispatch(&request, command_type, &self.config)
            .await?;
        result.summary = "Execution is completed.".to_string();
        Ok(Some(result))
    }

    /// Emit one Running checkpoint to both host sinks.
    fn checkpoint(
        &self,
        context: &ExecutionContext,
        lifecycle: &mut ExecutionLifecycle,
        observer: &dyn ExecutionObserver,
        message: &str,
    ) -> Result<()> {
        if lifecycle.status() == ExecutionStatus::None {
            lifecycle.transition(ExecutionStatus::Running)?;
        }
        let sequence = lifecycle.checkpoint(message);
        observer.report_progress(context, message, lifecycle.status(), sequence);
        observer.report_log(context, message, LogLevel::Info, None);
        Ok(())
    }
}
