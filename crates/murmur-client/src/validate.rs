//! Pre-flight file validation
//!
//! Runs before any network call; an invalid file never leaves the client.

/// MIME types the relay accepts
pub const ALLOWED_TYPES: [&str; 5] = ["audio/mp3", "audio/mpeg", "video/mp4", "audio/mp4", "audio/wav"];

/// Client-side size ceiling in megabytes
///
/// Deliberately tighter than the server's 50 MiB transport ceiling, so a
/// file that slips past this check is still caught server-side.
pub const MAX_FILE_SIZE_MB: usize = 19;

/// Check a candidate file's declared type and size
///
/// Returns `None` when the file is acceptable, or a human-readable
/// description of the first failed rule. Never panics.
#[allow(clippy::cast_precision_loss)]
pub fn validate_file(content_type: &str, size_bytes: usize) -> Option<String> {
    if !ALLOWED_TYPES.contains(&content_type) {
        return Some("Invalid file format. Please upload MP3 or MP4.".to_string());
    }

    let size_mb = size_bytes as f64 / (1024.0 * 1024.0);
    if size_mb > MAX_FILE_SIZE_MB as f64 {
        return Some(format!("File too large ({size_mb:.1}MB). Limit is ~{MAX_FILE_SIZE_MB}MB."));
    }

    None
}
