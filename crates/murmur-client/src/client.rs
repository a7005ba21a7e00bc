use bytes::Bytes;
use serde::Deserialize;
use url::Url;

use crate::error::{MurmurClientError, Result};
use crate::types::Transcription;
use crate::validate::validate_file;

/// Typed client for the murmur transcription relay
///
/// No retries and no explicit request timeout: the upload is a single
/// POST that stays open for as long as the server's tool runs, so the
/// transport default applies.
#[derive(Debug, Clone)]
pub struct MurmurClient {
    base_url: Url,
    http: reqwest::Client,
}

impl MurmurClient {
    /// Create a new client pointing at the given base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| MurmurClientError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Upload a file and wait for its transcript
    ///
    /// Validates the declared type and size first; an invalid file is
    /// rejected without touching the network. On a non-success status the
    /// server's error envelope is unwrapped into a single message, falling
    /// back to the HTTP status text when the body is not the expected JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the request cannot be sent,
    /// or the server reports a failure
    pub async fn transcribe(&self, audio: Bytes, filename: &str, content_type: &str) -> Result<Transcription> {
        if let Some(reason) = validate_file(content_type, audio.len()) {
            return Err(MurmurClientError::Validation(reason));
        }

        let url = make_url(&self.base_url, "/transcribe");

        let part = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name(filename.to_owned())
            .mime_str(content_type)
            .map_err(|e| MurmurClientError::Config(format!("invalid mime type: {e}")))?;

        let form = reqwest::multipart::Form::new().part("audio", part);

        let response = self.http.post(url).multipart(form).send().await?;

        unwrap_envelope(response)
            .await?
            .json()
            .await
            .map_err(|e| MurmurClientError::Parse(e.to_string()))
    }

    /// Base URL this client points at
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

fn make_url(base_url: &Url, path: &str) -> String {
    format!("{}{path}", base_url.as_str().trim_end_matches('/'))
}

/// Error envelope the server attaches to non-success responses
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    details: Option<String>,
}

/// Pass a success response through, otherwise unwrap the error envelope
async fn unwrap_envelope(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorEnvelope>().await {
        Ok(ErrorEnvelope {
            error: Some(error),
            details: Some(details),
        }) => format!("{error}: {details}"),
        Ok(ErrorEnvelope { error: Some(error), .. }) => error,
        _ => status.canonical_reason().unwrap_or("request failed").to_string(),
    };

    Err(MurmurClientError::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_join_avoids_double_slash() {
        let base = Url::parse("http://localhost:3001/").unwrap();
        assert_eq!(make_url(&base, "/transcribe"), "http://localhost:3001/transcribe");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let err = MurmurClient::new("not a url").unwrap_err();
        assert!(matches!(err, MurmurClientError::Config(_)));
    }

    #[tokio::test]
    async fn invalid_file_never_reaches_the_network() {
        // Points at a port nothing listens on; validation must fail first
        let client = MurmurClient::new("http://127.0.0.1:9").unwrap();

        let err = client
            .transcribe(Bytes::from_static(b"%PDF"), "doc.pdf", "application/pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, MurmurClientError::Validation(_)));
    }
}
