//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use murmur_config::{Config, HealthConfig, ServerConfig, TranscriberConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig {
                        enabled: true,
                        ..HealthConfig::default()
                    },
                    ..ServerConfig::default()
                },
                transcriber: TranscriberConfig::default(),
            },
        }
    }

    /// Point the transcriber at a tool script and upload directory
    pub fn with_tool(mut self, script: &Path, upload_dir: &Path) -> Self {
        self.config.transcriber.script = script.to_path_buf();
        self.config.transcriber.upload_dir = upload_dir.to_path_buf();
        self
    }

    /// Set the transport-layer upload ceiling
    pub fn with_max_upload_bytes(mut self, limit: usize) -> Self {
        self.config.transcriber.max_upload_bytes = limit;
        self
    }

    /// Bound tool runtime
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.config.transcriber.timeout_secs = Some(secs);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
