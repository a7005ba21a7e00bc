use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the transcription tool is not configured or a
    /// limit is set to a meaningless value
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.transcriber.script.as_os_str().is_empty() {
            anyhow::bail!("transcriber.script must point at the transcription tool");
        }

        if self.transcriber.max_upload_bytes == 0 {
            anyhow::bail!("transcriber.max_upload_bytes must be greater than 0");
        }

        if self.transcriber.timeout_secs == Some(0) {
            anyhow::bail!("transcriber.timeout_secs must be greater than 0 when set");
        }

        Ok(())
    }
}
