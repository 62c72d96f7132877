//! Request validation.
//!
//! Checks run in a strict order and the first failure wins; no aggregation.
//! The error wording is contractual — hosting callers and tests assert on the
//! exact messages — so each check carries its message verbatim. Validation is
//! pure: no I/O, no side effects. On success the parsed [`CommandType`] is
//! returned so the dispatcher can branch exhaustively without re-parsing.

use crate::error::{DispatchError, Result};
use crate::regions;
use crate::types::{CommandRequest, CommandType};
use std::str::FromStr;

fn is_blank(value: Option<&String>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Validate a request, returning its parsed command type.
pub fn validate_request(request: &CommandRequest) -> Result<CommandType> {
    if request.is_empty() {
        return Err(DispatchError::Validation(
            "Request cannot be null or empty.".to_string(),
        ));
    }
    if is_blank(request.instance_id.as_ref()) {
        return Err(DispatchError::Validation(
            "Instance id cannot be null or empty.".to_string(),
        ));
    }
    let command_type = request
        .command_type
        .as_deref()
        .and_then(|raw| CommandType::from_str(raw).ok())
        .ok_or_else(|| {
            DispatchError::Validation(
                "Command type cannot be null or empty. Support types: send-command, get-command-invocation."
                    .to_string(),
            )
        })?;
    if command_type == CommandType::GetCommandInvocation && is_blank(request.command_id.as_ref()) {
        return Err(DispatchError::Validation(
            "Command id cannot be null or empty for 'get-command-invocation'.".to_string(),
        ));
    }
    if command_type == CommandType::SendCommand && is_blank(request.command_document.as_ref()) {
        return Err(DispatchError::Validation(
            "Command document cannot be null or empty for 'send-command'.".to_string(),
        ));
    }
    if command_type == CommandType::SendCommand && is_blank(request.command_comment.as_ref()) {
        return Err(DispatchError::Validation(
            "Command comment cannot be null or empty for 'send-command'.".to_string(),
        ));
    }
    if !regions::is_known_region(request.region.as_deref()) {
        return Err(DispatchError::Validation(
            "AWS region specified is not valid.".to_string(),
        ));
    }
    if is_blank(request.authority_role.as_ref()) {
        return Err(DispatchError::Validation(
            "AWS role cannot be null or empty.".to_string(),
        ));
    }
    Ok(command_type)
}
