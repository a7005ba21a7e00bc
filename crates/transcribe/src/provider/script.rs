use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::TranscribeError;

use super::{ToolInvocation, Transcriber};

/// Transcription tool invoked as a child process
///
/// Runs the configured executable with the audio path as its only argument.
/// Without a timeout the wait is unbounded: a hung tool holds the request
/// open until it exits or the server shuts down.
pub(crate) struct ScriptTranscriber {
    script: PathBuf,
    timeout: Option<Duration>,
}

impl ScriptTranscriber {
    pub fn new(script: PathBuf, timeout: Option<Duration>) -> Self {
        Self { script, timeout }
    }
}

#[async_trait]
impl Transcriber for ScriptTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> crate::error::Result<ToolInvocation> {
        let started = Instant::now();

        let mut command = Command::new(&self.script);
        command.arg(audio_path).kill_on_drop(true);

        let outcome = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output()).await.map_err(|_| {
                TranscribeError::Tool {
                    details: format!("transcription tool timed out after {}s", limit.as_secs()),
                }
            })?,
            None => command.output().await,
        };

        let output = outcome.map_err(|e| TranscribeError::Tool {
            details: format!("failed to run {}: {e}", self.script.display()),
        })?;

        tracing::debug!(
            elapsed = ?started.elapsed(),
            code = output.status.code(),
            "transcription tool finished"
        );

        Ok(ToolInvocation {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }

    fn name(&self) -> &str {
        "script"
    }
}
