//! Transient on-disk lifetime of an uploaded payload

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::Result;

/// Extension assumed when the original filename has none
///
/// The downstream tool dispatches behavior by file extension, so every
/// spooled file must carry one.
const DEFAULT_EXTENSION: &str = "mp3";

/// A payload written to the upload directory for the lifetime of one request
///
/// The file is written under a fresh generated name, then renamed once to
/// carry the original file's extension. Callers must invoke [`cleanup`]
/// on every exit path; deletion failures are logged, never propagated.
///
/// [`cleanup`]: SpooledUpload::cleanup
pub(crate) struct SpooledUpload {
    path: PathBuf,
}

impl SpooledUpload {
    /// Spool a payload and qualify it with the original file's extension
    pub async fn write(upload_dir: &Path, filename: &str, payload: &[u8]) -> Result<Self> {
        let staged = upload_dir.join(Uuid::new_v4().simple().to_string());
        tokio::fs::write(&staged, payload).await?;

        let qualified = staged.with_extension(extension_of(filename));
        if let Err(e) = tokio::fs::rename(&staged, &qualified).await {
            remove_or_warn(&staged).await;
            return Err(e.into());
        }

        Ok(Self { path: qualified })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the spooled file
    ///
    /// A deletion failure must never override the request's primary
    /// outcome, so it is logged and swallowed here.
    pub async fn cleanup(self) {
        remove_or_warn(&self.path).await;
    }
}

async fn remove_or_warn(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %e, "failed to delete spooled upload");
    }
}

fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .unwrap_or(DEFAULT_EXTENSION)
        .to_string()
}
