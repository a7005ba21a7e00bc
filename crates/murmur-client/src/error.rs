/// Client-specific result type
pub type Result<T> = std::result::Result<T, MurmurClientError>;

/// Errors from the murmur client
#[derive(Debug, thiserror::Error)]
pub enum MurmurClientError {
    /// File rejected before any network call
    #[error("{0}")]
    Validation(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("{status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
    },

    /// Failed to parse response
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
