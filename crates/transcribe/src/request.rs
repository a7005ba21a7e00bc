use std::sync::Arc;

use axum::body::Body;

use crate::{error::TranscribeError, server::Server, types::UploadRequest};

/// Filename assumed when the client does not declare one
const FALLBACK_FILENAME: &str = "audio.mp3";

/// Extractor for multipart form data carrying one `audio` file field
pub struct ExtractUpload(pub UploadRequest);

impl axum::extract::FromRequest<Arc<Server>> for ExtractUpload {
    type Rejection = TranscribeError;

    async fn from_request(
        request: http::Request<Body>,
        state: &Arc<Server>,
    ) -> Result<Self, Self::Rejection> {
        let (parts, body) = request.into_parts();

        // Verify content type is multipart/form-data
        let content_type = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("multipart/form-data") {
            return Err(TranscribeError::UnsupportedMediaType);
        }

        let limit = state.max_upload_bytes();

        let bytes = axum::body::to_bytes(body, limit).await.map_err(|err| {
            if is_length_limit(&err) {
                TranscribeError::PayloadTooLarge { limit }
            } else {
                TranscribeError::InvalidRequest(format!("failed to read request body: {err}"))
            }
        })?;

        // Reassemble the request for multipart parsing
        let mut rebuilt = http::Request::builder().method(parts.method.clone()).uri(parts.uri.clone());

        for (key, value) in &parts.headers {
            rebuilt = rebuilt.header(key, value);
        }

        let rebuilt = rebuilt
            .body(Body::from(bytes))
            .map_err(|e| TranscribeError::InvalidRequest(format!("failed to rebuild request: {e}")))?;

        let mut multipart = axum::extract::Multipart::from_request(rebuilt, &())
            .await
            .map_err(|e| TranscribeError::InvalidRequest(format!("failed to parse multipart form: {e}")))?;

        let mut audio: Option<Vec<u8>> = None;
        let mut filename = String::from(FALLBACK_FILENAME);
        let mut file_content_type = String::from("application/octet-stream");

        while let Ok(Some(field)) = multipart.next_field().await {
            // Only the audio field matters; unknown fields are skipped
            if field.name() != Some("audio") {
                continue;
            }

            if let Some(name) = field.file_name() {
                filename = name.to_string();
            }
            if let Some(ct) = field.content_type() {
                file_content_type = ct.to_string();
            }
            audio = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| TranscribeError::InvalidRequest(format!("failed to read audio data: {e}")))?
                    .to_vec(),
            );
        }

        let audio = audio.ok_or(TranscribeError::MissingAudio)?;

        Ok(Self(UploadRequest {
            audio,
            filename,
            content_type: file_content_type,
        }))
    }
}

/// Whether an axum body error was caused by the size ceiling
fn is_length_limit(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        current = e.source();
    }
    false
}
