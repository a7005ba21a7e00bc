//! Client-local upload session state
//!
//! Models the lifecycle a UI observes: idle, processing, completed, or
//! errored. Strictly local bookkeeping with no I/O; resetting returns
//! everything to the initial state.

use crate::types::Transcription;
use crate::validate::validate_file;

/// Lifecycle of one upload as the UI observes it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Processing,
    Completed,
    Error,
}

/// A file the user has picked, held client-side until upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub filename: String,
    pub content_type: String,
    pub size_bytes: usize,
}

/// Client-local session state
#[derive(Debug, Default)]
pub struct Session {
    status: Status,
    file: Option<SelectedFile>,
    result: Option<Transcription>,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn result(&self) -> Option<&Transcription> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate and stage a newly picked file
    ///
    /// A stale result or error from a previous upload is cleared either
    /// way; a rejected file leaves nothing selected.
    pub fn select_file(&mut self, file: SelectedFile) -> bool {
        self.result = None;
        self.status = Status::Idle;

        match validate_file(&file.content_type, file.size_bytes) {
            Some(reason) => {
                self.error = Some(reason);
                self.file = None;
                false
            }
            None => {
                self.error = None;
                self.file = Some(file);
                true
            }
        }
    }

    /// Mark the staged upload as in flight
    pub fn begin_processing(&mut self) {
        self.status = Status::Processing;
        self.error = None;
    }

    /// Record a successful transcription
    pub fn complete(&mut self, result: Transcription) {
        self.status = Status::Completed;
        self.result = Some(result);
    }

    /// Record a failed upload
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = Status::Error;
        self.error = Some(message.into());
    }

    /// "Start Over": back to the initial state with nothing selected
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
