//! Utho Client
//!
//! Main client for interacting with the Utho API, combining the bearer token,
//! the base URL and the HTTP request builder.

use super::error::{ApiError, Result};
use super::http::{self, UthoHttpClient};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Production API root
pub const BASE_URL: &str = "https://api.utho.com/v2/";

/// Main Utho client, handed to every adapter
#[derive(Clone)]
pub struct UthoClient {
    token: String,
    base_url: Url,
    pub http: UthoHttpClient,
}

impl std::fmt::Debug for UthoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UthoClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl UthoClient {
    /// Create a client against the production API
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Create a client against another API root (staging, mock servers)
    pub fn with_base_url(token: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            token: token.to_string(),
            base_url: normalize_base_url(base_url)?,
            http: UthoHttpClient::new()?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build an absolute URL from a path relative to the API root
    pub fn url(&self, path: &str) -> Result<String> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?.to_string())
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<T> {
        let url = self.url(path)?;
        let response = self.http.send(method, &url, body, &self.token).await?;
        http::decode(response).await
    }

    /// Make a GET request and decode the reply
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::GET, path, None).await
    }

    /// Make a POST request with a JSON body and decode the reply
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.call(Method::POST, path, Some(encode(body)?)).await
    }

    /// Make a PUT request with a JSON body and decode the reply
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        self.call(Method::PUT, path, Some(encode(body)?)).await
    }

    /// Make a DELETE request and decode the reply
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call(Method::DELETE, path, None).await
    }

    /// Make a DELETE request that carries a JSON body (confirmation payloads)
    pub async fn delete_with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.call(Method::DELETE, path, Some(encode(body)?)).await
    }

    /// GET for read-only lookups: anything but HTTP 200 is an error carrying
    /// the raw body, and the reply has no status envelope to check.
    pub async fn get_ok<T: DeserializeOwned>(&self, path: &str, what: &'static str) -> Result<T> {
        let url = self.url(path)?;
        let response = self.http.send(Method::GET, &url, None, &self.token).await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            tracing::error!("API error: {} - {}", status, http::sanitize_for_log(&body));
            return Err(ApiError::UnexpectedStatus {
                what,
                status: status.as_u16(),
                body,
            });
        }

        http::decode(response).await
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(ApiError::Encode)
}

/// Parse a base URL, making sure it ends with `/` so relative joins append
/// rather than replace the last segment.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Percent-encode one path segment taken from user input
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
