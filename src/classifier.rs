//! Provider error classification.
//!
//! Maps the remote service's error codes for the send-command and
//! get-command-invocation operations to stable, user-facing messages. Codes
//! outside the table (including `ValidationException`, whose provider text is
//! already user-readable) pass the fallback message through unchanged. Pure
//! table lookup, no state.

/// Classify a provider error code into its stable message. `fallback` is the
/// provider's own message, used verbatim for unrecognized codes.
pub fn classify(code: &str, fallback: &str) -> String {
    match code {
        // send-command error codes
        "DuplicateInstanceId" => {
            "You cannot specify an instance ID in more than one association.".to_string()
        }
        "InternalServerError" => "Internal server error.".to_string(),
        "InvalidDocument" => "The specified document does not exist.".to_string(),
        "InvalidDocumentVersion" => {
            "The document version is not valid or does not exist.".to_string()
        }
        "ExpiredTokenException" => {
            "The security token included in the request is expired.".to_string()
        }
        "InvalidInstanceId" => "The instance is invalid.".to_string(),
        "InvalidNotificationConfig" => {
            "One or more configuration items is not valid.".to_string()
        }
        "InvalidOutputFolder" => "The S3 bucket does not exist.".to_string(),
        "InvalidParameters" => {
            "You must specify values for all required parameters in the Systems Manager document."
                .to_string()
        }
        "InvalidRole" => "The role name can't contain invalid characters.".to_string(),
        "MaxDocumentSizeExceeded" => "The size limit of a document is 64 KB.".to_string(),
        "UnsupportedPlatformType" => {
            "The document does not support the platform type of the given instance ID(s)."
                .to_string()
        }
        // get-command-invocation error codes
        "InvalidCommandId" => "The command ID is invalid.".to_string(),
        "InvocationDoesNotExist" => {
            "The command id and instance id specified did not match any invocation.".to_string()
        }
        _ => fallback.to_string(),
    }
}
