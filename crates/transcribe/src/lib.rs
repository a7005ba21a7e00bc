#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod output;
mod provider;
mod request;
mod server;
mod spool;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{Result, TranscribeError};
pub use server::{Server, TranscribeServerBuilder};
pub use types::{TranscriptionResponse, UploadRequest};
use request::ExtractUpload;

/// Build the transcription server from configuration
///
/// Creates the upload directory if it does not exist yet; this is the one
/// piece of process-wide setup the relay needs.
///
/// # Errors
///
/// Returns an error if the server fails to initialize
pub fn build_server(config: &murmur_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TranscribeServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize transcription server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for transcription
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/transcribe", post(transcribe))
}

/// Handle transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    ExtractUpload(request): ExtractUpload,
) -> Result<Json<TranscriptionResponse>> {
    tracing::debug!(
        filename = %request.filename,
        bytes = request.audio.len(),
        "transcription handler called"
    );

    let response = server.transcribe(request).await?;

    tracing::debug!("transcription complete");

    Ok(Json(response))
}
