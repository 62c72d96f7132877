//! Error types for the dispatch core.
//!
//! The `Display` text of the surface variants is contractual: hosting callers
//! assert on the exact wording, so messages are carried verbatim rather than
//! being wrapped in category prefixes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// The request failed a validation precondition before any remote call.
    #[error("{0}")]
    Validation(String),
    /// The authority role could not be resolved to usable credentials.
    #[error("AWS credentials cannot be found for the execution.")]
    CredentialsNotFound,
    /// A poll request matched no invocation records.
    #[error("The command id and instance id specified did not match any invocation.")]
    InvocationNotFound,
    /// The remote service returned a recognized error code, already mapped to
    /// its stable message by the classifier.
    #[error("{0}")]
    Provider(String),
    /// Any other fault raised during dispatch; message passed through verbatim.
    #[error("{0}")]
    Unclassified(String),
    #[error("State transition error: {0}")]
    StateTransition(String),
}

pub type Result<T> = std::result::Result<T, DispatchError>;
