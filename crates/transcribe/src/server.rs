use std::path::PathBuf;
use std::time::Duration;

use crate::{
    error::TranscribeError,
    output,
    provider::{Transcriber, script::ScriptTranscriber},
    spool::SpooledUpload,
    types::{TranscriptionResponse, UploadRequest},
};

/// Transcription server: spools uploads and relays them to the external tool
pub struct Server {
    transcriber: Box<dyn Transcriber>,
    upload_dir: PathBuf,
    max_upload_bytes: usize,
}

impl Server {
    pub(crate) fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Relay one upload through the tool
    ///
    /// Spool → invoke → delete → parse. The spooled file is deleted on
    /// every path out of the invocation, including tool failure.
    pub(crate) async fn transcribe(&self, request: UploadRequest) -> crate::error::Result<TranscriptionResponse> {
        let spooled = SpooledUpload::write(&self.upload_dir, &request.filename, &request.audio).await?;

        tracing::info!(
            filename = %request.filename,
            spooled = %spooled.path().display(),
            tool = self.transcriber.name(),
            "received upload, starting transcription"
        );

        let outcome = self.transcriber.transcribe(spooled.path()).await;

        spooled.cleanup().await;

        let invocation = outcome?;

        if !invocation.success {
            let stderr = invocation.stderr.trim();
            let details = if stderr.is_empty() {
                match invocation.code {
                    Some(code) => format!("transcription tool exited with status {code}"),
                    None => "transcription tool terminated by signal".to_string(),
                }
            } else {
                stderr.to_string()
            };
            return Err(TranscribeError::Tool { details });
        }

        let transcription = output::clean_transcript(&invocation.stdout);
        let summary = output::summarize(&transcription);

        Ok(TranscriptionResponse { transcription, summary })
    }
}

/// Builder for constructing the transcription server from configuration
pub struct TranscribeServerBuilder<'a> {
    config: &'a murmur_config::Config,
}

impl<'a> TranscribeServerBuilder<'a> {
    pub fn new(config: &'a murmur_config::Config) -> Self {
        Self { config }
    }

    /// Build the server, creating the upload directory if needed
    ///
    /// Directory creation is idempotent and happens once here, at process
    /// start, never per request.
    pub fn build(self) -> crate::error::Result<Server> {
        let transcriber_config = &self.config.transcriber;

        std::fs::create_dir_all(&transcriber_config.upload_dir)?;

        let timeout = transcriber_config.timeout_secs.map(Duration::from_secs);
        if timeout.is_none() {
            tracing::debug!("no transcriber timeout configured, tool invocations are unbounded");
        }

        let transcriber = ScriptTranscriber::new(transcriber_config.script.clone(), timeout);

        tracing::debug!(
            script = %transcriber_config.script.display(),
            upload_dir = %transcriber_config.upload_dir.display(),
            "transcription server initialized"
        );

        Ok(Server {
            transcriber: Box::new(transcriber),
            upload_dir: transcriber_config.upload_dir.clone(),
            max_upload_bytes: transcriber_config.max_upload_bytes,
        })
    }
}
