use axum::response::IntoResponse;
use http::StatusCode;
use murmur_core::{ErrorBody, HttpError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscribeError>;

/// Errors that can occur while relaying an upload to the transcription tool
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// Multipart form did not contain the audio file field
    #[error("no audio file uploaded")]
    MissingAudio,

    /// Request body was not multipart/form-data
    #[error("expected multipart/form-data")]
    UnsupportedMediaType,

    /// Payload exceeded the transport-layer ceiling
    #[error("payload exceeds {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Malformed multipart body or unreadable field
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// External tool exited nonzero, failed to spawn, or timed out
    #[error("transcription tool failed: {details}")]
    Tool { details: String },

    /// Filesystem error while spooling the upload
    #[error("spool error: {0}")]
    Spool(#[from] std::io::Error),
}

impl HttpError for TranscribeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingAudio | Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Tool { .. } | Self::Spool(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::MissingAudio => "No audio file uploaded".to_string(),
            Self::UnsupportedMediaType => {
                "Unsupported Content-Type, expected multipart/form-data".to_string()
            }
            Self::PayloadTooLarge { .. } => "Audio file too large".to_string(),
            Self::InvalidRequest(reason) => format!("Invalid request: {reason}"),
            Self::Tool { .. } | Self::Spool(_) => "Transcription failed".to_string(),
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            Self::PayloadTooLarge { limit } => Some(format!("maximum upload size is {limit} bytes")),
            Self::Tool { details } => Some(details.clone()),
            Self::Spool(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

impl IntoResponse for TranscribeError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(%status, error = %self, "transcription request failed");
        }

        (status, axum::Json(ErrorBody::from_error(&self))).into_response()
    }
}
