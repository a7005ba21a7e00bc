use std::path::PathBuf;

use clap::Parser;

/// Murmur transcription relay
#[derive(Debug, Parser)]
#[command(name = "murmur", about = "Local relay between audio uploads and a speech-to-text tool")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "murmur.toml", env = "MURMUR_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "MURMUR_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
