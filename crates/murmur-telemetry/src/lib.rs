//! Telemetry for murmur
//!
//! Structured logging via the `tracing` ecosystem

/// Initialize the tracing subscriber
///
/// `log_filter` seeds the `EnvFilter` directive set; `RUST_LOG` takes
/// precedence when present.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed
pub fn init(log_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
