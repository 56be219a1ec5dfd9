//! Error types for the Utho API client.

use thiserror::Error;

/// Errors raised while talking to the Utho API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// DNS, connection or TLS failure, surfaced unchanged from reqwest.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The reply body was not the JSON we expected.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// A request struct could not be serialised.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The envelope reported a non-success status. The message is the API's
    /// own text, verbatim, and may be empty.
    #[error("{message}")]
    Api { message: String },

    /// A list-style read came back without the object we asked for.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Read-only lookups require HTTP 200 before the body is decoded.
    #[error("unexpected http status {status} received for {what}: {body}")]
    UnexpectedStatus {
        what: &'static str,
        status: u16,
        body: String,
    },

    /// The configured base URL could not be parsed or joined.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Build an application error from an envelope message.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;
