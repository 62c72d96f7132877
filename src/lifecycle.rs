//! Execution lifecycle state machine.
//!
//! One controller invocation owns exactly one [`ExecutionLifecycle`] value for
//! the duration of a request. Status moves forward through
//! `None -> Running -> {Complete | Failed}` and never regresses; once a
//! terminal status is reached the lifecycle is frozen. The state is an
//! explicit value threaded through the controller rather than ambient mutable
//! fields, so executions running side by side in one process cannot interfere.

use crate::error::{DispatchError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel sequence number reported with the terminal checkpoint.
pub const FINAL_SEQUENCE: u64 = u64::MAX;

/// Status of a single execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// Initial status before the first progress emission
    None,
    /// Request is being parsed, validated, or dispatched
    Running,
    /// Execution finished successfully
    Complete,
    /// Execution finished with a failure
    Failed,
}

impl ExecutionStatus {
    /// Check if this is a terminal status (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }

    /// Check whether a forward transition to `next` is allowed
    pub fn can_transition_to(&self, next: ExecutionStatus) -> bool {
        match self {
            Self::None => matches!(next, Self::Running),
            Self::Running => matches!(next, Self::Complete | Self::Failed),
            Self::Complete | Self::Failed => false,
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Running => write!(f, "running"),
            Self::Complete => write!(f, "complete"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for ExecutionStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "running" => Ok(Self::Running),
            "complete" => Ok(Self::Complete),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("Invalid execution status: {s}")),
        }
    }
}

/// Severity passed to the host's log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Error,
}

/// Process-local progress state for one execution. Not persisted.
#[derive(Debug, Clone)]
pub struct ExecutionLifecycle {
    status: ExecutionStatus,
    sequence: u64,
    progress_message: String,
}

impl ExecutionLifecycle {
    pub fn new() -> Self {
        Self {
            status: ExecutionStatus::None,
            sequence: 0,
            progress_message: String::new(),
        }
    }

    pub fn status(&self) -> ExecutionStatus {
        self.status
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn progress_message(&self) -> &str {
        &self.progress_message
    }

    /// Move the lifecycle forward to `next`. Regressions and transitions out
    /// of a terminal status are refused.
    pub fn transition(&mut self, next: ExecutionStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(DispatchError::StateTransition(format!(
                "cannot transition from {} to {}",
                self.status, next
            )));
        }
        self.status = next;
        Ok(())
    }

    /// Record the next progress checkpoint, stamping the message and bumping
    /// the sequence counter. Returns the sequence number to report.
    pub fn checkpoint(&mut self, message: impl Into<String>) -> u64 {
        self.progress_message = stamp(message.into());
        self.sequence += 1;
        self.sequence
    }

    /// Record the terminal checkpoint at the sentinel sequence value.
    pub fn final_checkpoint(&mut self, message: impl Into<String>) -> u64 {
        self.progress_message = stamp(message.into());
        self.sequence = FINAL_SEQUENCE;
        self.sequence
    }
}

impl Default for ExecutionLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

fn stamp(message: String) -> String {
    format!("{} {}", Utc::now().format("%Y-%m-%dT%H:%M:%SZ"), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_lifecycle_starts_at_none() {
        let lifecycle = ExecutionLifecycle::new();
        assert_eq!(lifecycle.status(), ExecutionStatus::None);
        assert_eq!(lifecycle.sequence(), 0);
    }

    #[test]
    fn forward_transitions_are_allowed() {
        let mut lifecycle = ExecutionLifecycle::new();
        lifecycle.transition(ExecutionStatus::Running).unwrap();
        lifecycle.transition(ExecutionStatus::Complete).unwrap();
        assert!(lifecycle.status().is_terminal());
    }

    #[test]
    fn terminal_status_is_frozen() {
        let mut lifecycle = ExecutionLifecycle::new();
        lifecycle.transition(ExecutionStatus::Running).unwrap();
        lifecycle.transition(ExecutionStatus::Failed).unwrap();
        assert!(lifecycle.transition(ExecutionStatus::Running).is_err());
        assert!(lifecycle.transition(ExecutionStatus::Complete).is_err());
    }

    #[test]
    fn regression_to_none_is_refused() {
        let mut lifecycle = ExecutionLifecycle::new();
        lifecycle.transition(ExecutionStatus::Running).unwrap();
        assert!(lifecycle.transition(ExecutionStatus::None).is_err());
    }

    #[test]
    fn checkpoints_are_monotonic_and_final_uses_sentinel() {
        let mut lifecycle = ExecutionLifecycle::new();
        assert_eq!(lifecycle.checkpoint("Parsing incoming request..."), 1);
        assert_eq!(lifecycle.checkpoint("Executing request..."), 2);
        assert_eq!(lifecycle.final_checkpoint("Execution is completed."), FINAL_SEQUENCE);
        assert!(lifecycle.progress_message().ends_with("Execution is completed."));
    }

    fn arb_status() -> impl Strategy<Value = ExecutionStatus> {
        prop_oneof![
            Just(ExecutionStatus::None),
            Just(ExecutionStatus::Running),
            Just(ExecutionStatus::Complete),
            Just(ExecutionStatus::Failed),
        ]
    }

    proptest! {
        /// Whatever transitions are attempted, the accepted status sequence is
        /// a prefix-closed walk of None -> Running -> {Complete | Failed}.
        #[test]
        fn accepted_transitions_never_regress(attempts in prop::collection::vec(arb_status(), 0..16)) {
            let mut lifecycle = ExecutionLifecycle::new();
            let mut observed = vec![lifecycle.status()];
            for next in attempts {
                if lifecycle.transition(next).is_ok() {
                    observed.push(next);
                }
            }
            for pair in observed.windows(2) {
                prop_assert!(pair[0].can_transition_to(pair[1]));
                prop_assert!(!pair[0].is_terminal());
            }
        }
    }
}
