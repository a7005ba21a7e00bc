#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed Rust HTTP client for the murmur transcription relay
//!
//! Validates files before any network traffic, performs the multipart
//! upload, and unwraps the server's error envelope into a single
//! human-readable message

mod client;
pub mod error;
pub mod session;
pub mod types;
pub mod validate;

pub use client::MurmurClient;
pub use error::{MurmurClientError, Result};
pub use types::Transcription;
