//! Error types for the field behavior.

use thiserror::Error;

/// Errors that can occur while working with a suggestions field.
///
/// The behavior path itself is infallible by design (malformed keyboard
/// payloads are dropped, missing collaborators skip their feature, and
/// degenerate geometry is clamped); only the configuration surface can fail.
#[derive(Error, Debug)]
pub enum FieldError {
    /// Field configuration could not be serialized or deserialized.
    #[error("invalid field configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for field operations.
pub type FieldResult<T> = Result<T, FieldError>;
