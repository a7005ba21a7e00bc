use serde::{Deserialize, Serialize};

/// One uploaded file, alive for the duration of a single request
#[derive(Debug)]
pub struct UploadRequest {
    /// Raw audio (or video) payload
    pub audio: Vec<u8>,
    /// Original filename as declared by the client
    pub filename: String,
    /// Declared content type of the payload
    pub content_type: String,
}

/// Transcript and naive summary returned to the caller
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text with tool diagnostics stripped
    pub transcription: String,
    /// First few period-delimited fragments of the transcript
    pub summary: String,
}
