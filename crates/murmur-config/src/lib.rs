#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod transcriber;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use server::*;
pub use transcriber::*;

/// Top-level murmur configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// External transcription tool configuration
    #[serde(default)]
    pub transcriber: TranscriberConfig,
}
