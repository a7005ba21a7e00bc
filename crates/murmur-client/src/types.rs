use serde::{Deserialize, Serialize};

/// Transcript and naive summary produced by one upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcription {
    /// Full transcribed text
    pub transcription: String,
    /// First few period-delimited fragments of the transcript
    pub summary: String,
}
