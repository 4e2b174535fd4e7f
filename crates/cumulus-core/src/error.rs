//! Error types module
//!
//! All failures are unified under the `AppError` enum: session problems,
//! bad input, and backend-call failures from the document store or the
//! object storage service. Errors carry no retry semantics; callers log
//! and re-raise (there is no local recovery anywhere in this system).

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for auth failures and other recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
/// over HTTP without the core crate depending on any HTTP types.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "DOCUMENT_STORE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Full internal message, for non-production detail fields
    fn detailed_message(&self) -> String;

    /// Whether details should be hidden in production
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Document store error: {0}")]
    DocumentStore(String),

    #[error("Object storage error: {0}")]
    ObjectStorage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("UUID parsing error: {}", err))
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::Unauthorized(_) => 401,
            AppError::NotFound(_) => 404,
            AppError::InvalidInput(_) | AppError::BadRequest(_) => 400,
            AppError::PayloadTooLarge(_) => 413,
            AppError::DocumentStore(_)
            | AppError::ObjectStorage(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::DocumentStore(_) => "DOCUMENT_STORE_ERROR",
            AppError::ObjectStorage(_) => "OBJECT_STORAGE_ERROR",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Unauthorized(msg) => format!("Unauthorized: {}", msg),
            AppError::NotFound(msg) => msg.clone(),
            AppError::InvalidInput(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) => format!("File too large: {}", msg),
            AppError::DocumentStore(_) => "Document store request failed".to_string(),
            AppError::ObjectStorage(_) => "Object storage request failed".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    fn detailed_message(&self) -> String {
        self.to_string()
    }

    fn is_sensitive(&self) -> bool {
        matches!(
            self,
            AppError::Internal(_) | AppError::InternalWithSource { .. }
        )
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::NotFound(_) | AppError::InvalidInput(_) | AppError::BadRequest(_) => {
                LogLevel::Debug
            }
            AppError::Unauthorized(_) | AppError::PayloadTooLarge(_) => LogLevel::Warn,
            AppError::DocumentStore(_)
            | AppError::ObjectStorage(_)
            | AppError::Internal(_)
            | AppError::InternalWithSource { .. } => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        assert_eq!(AppError::Unauthorized("no session".into()).http_status_code(), 401);
        assert_eq!(AppError::NotFound("file".into()).http_status_code(), 404);
        assert_eq!(AppError::InvalidInput("sort".into()).http_status_code(), 400);
        assert_eq!(AppError::DocumentStore("down".into()).http_status_code(), 500);
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = AppError::Internal("connection string leaked".into());
        assert!(err.is_sensitive());
        assert_eq!(err.client_message(), "Internal server error");
        assert!(err.detailed_message().contains("connection string leaked"));
    }

    #[test]
    fn backend_failures_log_at_error_level() {
        assert_eq!(AppError::ObjectStorage("503".into()).log_level(), LogLevel::Error);
        assert_eq!(AppError::NotFound("x".into()).log_level(), LogLevel::Debug);
    }
}
