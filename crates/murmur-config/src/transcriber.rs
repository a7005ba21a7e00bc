use std::path::PathBuf;

use serde::Deserialize;

/// External transcription tool configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranscriberConfig {
    /// Executable invoked with the spooled audio path as its only argument
    #[serde(default)]
    pub script: PathBuf,
    /// Directory where uploads are spooled while the tool runs
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// Transport-layer ceiling on uploaded payloads, in bytes
    ///
    /// Deliberately looser than the client's pre-flight ceiling; the client
    /// rejects most oversized files before they reach the network.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Bound on tool runtime in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for TranscriberConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::new(),
            upload_dir: default_upload_dir(),
            max_upload_bytes: default_max_upload_bytes(),
            timeout_secs: None,
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

const fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}
