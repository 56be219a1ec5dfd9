//! HTTP utilities for Utho REST API calls

use super::error::Result;
use reqwest::header::{ACCEPT_ENCODING, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and drops control characters
pub fn sanitize_for_log(body: &str) -> String {
    let truncated = match body.char_indices().nth(MAX_LOG_BODY_LENGTH) {
        Some((cut, _)) => format!("{}... [truncated, {} bytes total]", &body[..cut], body.len()),
        None => body.to_string(),
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Utho API calls
#[derive(Clone, Debug)]
pub struct UthoHttpClient {
    client: Client,
}

impl UthoHttpClient {
    /// Create a new HTTP client with default transport settings
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("utho-provider/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Issue one request carrying the bearer token and an optional JSON body.
    ///
    /// The raw response is returned untouched; status codes and body content
    /// are for the caller to interpret.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
        token: &str,
    ) -> Result<Response> {
        tracing::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT_ENCODING, "application/json");

        if let Some(body) = body {
            request = request.body(body);
        }

        Ok(request.send().await?)
    }
}

/// Decode a reply body into `T`, whatever the HTTP status.
///
/// Utho reports failures inside the JSON envelope, so the body is decoded even
/// on 4xx/5xx. An empty body decodes as `{}`.
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
        tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
    }

    let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_short_body_unchanged() {
        assert_eq!(sanitize_for_log(r#"{"status":"ok"}"#), r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_sanitize_truncates_long_body() {
        let body = "a".repeat(500);
        let out = sanitize_for_log(&body);
        assert!(out.starts_with(&"a".repeat(200)));
        assert!(out.contains("[truncated, 500 bytes total]"));
    }

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize_for_log("line\none\ttab"), "lineonetab");
    }

    #[test]
    fn test_sanitize_respects_char_boundaries() {
        let body = "é".repeat(300);
        let out = sanitize_for_log(&body);
        assert!(out.contains("[truncated, 600 bytes total]"));
    }
}
