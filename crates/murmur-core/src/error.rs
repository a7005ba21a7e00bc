use http::StatusCode;
use serde::Serialize;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type. The server layer
/// converts these into actual HTTP responses, keeping domain errors
/// decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Supplementary diagnostic text, serialized alongside the message
    fn details(&self) -> Option<String> {
        None
    }
}

/// JSON envelope every endpoint uses for error responses
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable, human-readable description of what failed
    pub error: String,
    /// Captured diagnostics, present when the error carries any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    /// Build the envelope from a domain error
    pub fn from_error<E: HttpError>(err: &E) -> Self {
        Self {
            error: err.client_message(),
            details: err.details(),
        }
    }
}
