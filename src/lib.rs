#![allow(clippy::doc_markdown)] // Allow technical terms like PowerShell, GovCloud in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # SSM Dispatch Core
//!
//! Command-dispatch adapter for AWS Systems Manager remote execution,
//! designed to be embedded in an orchestration engine.
//!
//! ## Overview
//!
//! Given a structured request describing a remote-execution intent — issue a
//! command document against a target instance, or poll the status and output
//! of a previously issued command — this crate validates the request, invokes
//! the corresponding remote operation through an abstract service boundary,
//! and returns a normalized result with progress reporting and stable error
//! classification.
//!
//! The hosting runtime owns payload deserialization, credential storage, and
//! the real SDK client; this crate owns the decision logic:
//!
//! - ordered request validation with contractual error wording
//! - the closed issue-vs-poll command union, dispatched exhaustively
//! - classification of provider error codes into stable messages
//! - the `None -> Running -> {Complete | Failed}` progress lifecycle
//!
//! ## Module Organization
//!
//! - [`types`] - Request, result, and command-type values
//! - [`validation`] - Ordered request validation
//! - [`regions`] - Bundled catalog of deployment regions
//! - [`classifier`] - Provider error-code classification
//! - [`service`] - The abstract remote service and credential boundaries
//! - [`dispatcher`] - Single-call dispatch and response normalization
//! - [`lifecycle`] - Execution status state machine
//! - [`controller`] - Top-level entry point and host progress reporting
//! - [`config`] - Operator-supplied transport and command tuning
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ssm_dispatch::{
//!     CommandDispatcher, CommandRequest, DispatchConfig, ExecutionController,
//! };
//! # use ssm_dispatch::service::{CredentialResolver, RemoteCommandService};
//! # use ssm_dispatch::controller::ExecutionObserver;
//!
//! # async fn example(
//! #     service: Arc<dyn RemoteCommandService>,
//! #     resolver: Arc<dyn CredentialResolver>,
//! #     observer: &dyn ExecutionObserver,
//! # ) {
//! let config = DispatchConfig::from_json_or_default(None);
//! let dispatcher = CommandDispatcher::new(service, resolver);
//! let controller = ExecutionController::new(dispatcher, config);
//!
//! let request: Option<CommandRequest> = None; // host-deserialized payload
//! let report = controller.execute(request, false, observer).await;
//! println!("finished with status {}", report.status);
//! # }
//! ```
//!
//! ## Concurrency
//!
//! One controller invocation handles exactly one request and owns its own
//! lifecycle value. The dispatcher, region catalog, and classifier are
//! read-only and safely shareable across concurrent executions via `Arc`.

pub mod classifier;
pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod regions;
pub mod service;
pub mod types;
pub mod validation;

pub use config::DispatchConfig;
pub use controller::{ExecutionContext, ExecutionController, ExecutionObserver, ExecutionReport};
pub use dispatcher::CommandDispatcher;
pub use error::{DispatchError, Result};
pub use lifecycle::{ExecutionLifecycle, ExecutionStatus, LogLevel, FINAL_SEQUENCE};
pub use service::{
    AwsCredentials, ClientSettings, CommandInvocation, CredentialResolver, InvocationQuery,
    IssuedCommand, PluginOutput, ProviderFault, RemoteCommandService, SendCommandCall,
};
pub use types::{CommandRequest, CommandResult, CommandType, ResultStatus};
pub use validation::validate_request;
