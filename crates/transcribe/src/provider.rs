pub(crate) mod script;

use std::path::Path;

use async_trait::async_trait;

/// Captured result of one tool invocation
#[derive(Debug)]
pub(crate) struct ToolInvocation {
    /// Everything the tool printed on stdout
    pub stdout: String,
    /// Everything the tool printed on stderr
    pub stderr: String,
    /// Whether the tool exited with status zero
    pub success: bool,
    /// Exit code, absent when the tool was terminated by a signal
    pub code: Option<i32>,
}

/// Trait for transcription tool implementations
#[async_trait]
pub(crate) trait Transcriber: Send + Sync {
    /// Run the tool against a spooled audio file, capturing both streams
    ///
    /// `Err` means the tool could not be run at all (spawn failure or
    /// timeout); a nonzero exit is reported through [`ToolInvocation`].
    async fn transcribe(&self, audio_path: &Path) -> crate::error::Result<ToolInvocation>;

    /// Get the tool name
    fn name(&self) -> &str;
}
