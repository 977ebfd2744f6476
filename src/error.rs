//! Error handling for Shapeview
//!
//! Covers the four error classes of the upload pipeline: validation,
//! transport, application (service-reported), and malformed-response.
//! None of these are fatal; every path leaves the UI state retryable.

use thiserror::Error;

/// Result type alias for Shapeview operations
pub type Result<T> = std::result::Result<T, ShapeviewError>;

/// Main error type for Shapeview operations
#[derive(Error, Debug)]
pub enum ShapeviewError {
    // Validation Errors
    #[error("Missing required file(s): {}", missing.join(", "))]
    MissingFiles { missing: Vec<String> },

    // Transport Errors
    #[error("Upload failed: {message}")]
    Transport { message: String },

    // Application Errors (semantic failure reported by the service)
    #[error("{message}")]
    Application { message: String },

    // Malformed-Response Errors (banner text only; the parse detail goes
    // to the log, not the user)
    #[error("{message}")]
    MalformedResponse { message: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ShapeviewError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            ShapeviewError::MissingFiles { .. } => "MISSING_FILES",
            ShapeviewError::Transport { .. } => "TRANSPORT_ERROR",
            ShapeviewError::Application { .. } => "APPLICATION_ERROR",
            ShapeviewError::MalformedResponse { .. } => "MALFORMED_RESPONSE",
            ShapeviewError::Io(_) => "IO_ERROR",
            ShapeviewError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable by the user retrying
    pub fn is_recoverable(&self) -> bool {
        match self {
            ShapeviewError::MissingFiles { .. } => true,
            ShapeviewError::Transport { .. } => true,
            ShapeviewError::Application { .. } => true,
            ShapeviewError::MalformedResponse { .. } => true,
            _ => false,
        }
    }

    /// The text shown in the status banner for this error.
    ///
    /// Application errors surface the service message verbatim; the rest
    /// use the display form.
    pub fn notification_text(&self) -> String {
        self.to_string()
    }
}
