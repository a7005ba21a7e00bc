//! Stub transcription tool backed by a generated shell script

use std::path::{Path, PathBuf};

/// A disposable tool script plus a matching upload directory
///
/// Everything lives inside one temp dir that disappears on drop.
pub struct StubTool {
    _dir: tempfile::TempDir,
    script: PathBuf,
    upload_dir: PathBuf,
}

impl StubTool {
    /// Script that prints the usual diagnostics plus the given transcript
    pub fn echoing(transcript: &str) -> anyhow::Result<Self> {
        let body = format!(
            "#!/bin/sh\n\
             echo \"Detecting language: en\"\n\
             echo \"Transcribing $1 ...\"\n\
             printf '%s\\n' '{transcript}'\n"
        );
        Self::from_script(&body)
    }

    /// Script that writes `stderr` and exits with `code`
    pub fn failing(stderr: &str, code: i32) -> anyhow::Result<Self> {
        let body = format!("#!/bin/sh\necho '{stderr}' >&2\nexit {code}\n");
        Self::from_script(&body)
    }

    /// Script that sleeps for `secs` before producing output
    pub fn hanging(secs: u64) -> anyhow::Result<Self> {
        let body = format!("#!/bin/sh\nsleep {secs}\necho done\n");
        Self::from_script(&body)
    }

    fn from_script(body: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;

        let script = dir.path().join("transcribe.sh");
        std::fs::write(&script, body)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;
        }

        let upload_dir = dir.path().join("uploads");

        Ok(Self {
            _dir: dir,
            script,
            upload_dir,
        })
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Number of files currently spooled in the upload directory
    pub fn spooled_files(&self) -> usize {
        match std::fs::read_dir(&self.upload_dir) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }
}
