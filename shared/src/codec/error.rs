use thiserror::Error;

/// Errors that can occur when encoding or decoding attachment values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Attachment type has no persistence codec
    #[error("Attachment type '{id}' is not persistent. Configure it with `persistent()` before storing values")]
    NotPersistent { id: String },

    /// Attachment type has no sync configuration
    #[error("Attachment type '{id}' is not synced. Configure it with `sync_with()` before sending values")]
    NotSynced { id: String },

    /// Value handed to a type-erased operation was not of the attachment's value type
    #[error("Value passed for attachment type '{id}' is not of the expected type {expected}")]
    TypeMismatch { id: String, expected: &'static str },

    /// Persistence codec failed to convert a value
    #[error("Persistence codec failed: {message}")]
    Persistence { message: String },

    /// Network codec could not read a value from the supplied bytes
    #[error("Network data for attachment type '{id}' is malformed or truncated")]
    Malformed { id: String },
}

impl From<serde_json::Error> for CodecError {
    fn from(error: serde_json::Error) -> Self {
        CodecError::Persistence {
            message: error.to_string(),
        }
    }
}
