//! Response envelope contract
//!
//! Every Utho reply carries a `status` string and an optional `message`.
//! Reply types flatten [`Envelope`] next to their own fields and call one of
//! the two checks below before handing the payload back.

use super::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// The literal status value the API uses for a successful call.
pub const SUCCESS: &str = "success";

/// `status` / `message` pair present on every reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    fn error(&self) -> ApiError {
        ApiError::api(self.message.clone().unwrap_or_default())
    }

    /// Strict check: anything other than `status == "success"` is a failure,
    /// including a reply with no status at all.
    pub fn ensure_success(&self) -> Result<()> {
        match self.status.as_deref() {
            Some(SUCCESS) => Ok(()),
            _ => Err(self.error()),
        }
    }

    /// Lenient check for list wrappers that may omit the status field: fails
    /// only when a status is present and is not `"success"`.
    pub fn ensure_not_failed(&self) -> Result<()> {
        match self.status.as_deref() {
            None | Some(SUCCESS) => Ok(()),
            Some(_) => Err(self.error()),
        }
    }
}

/// Take the first element of a pluralised wrapper; extra elements are ignored.
pub fn first_or_not_found<T>(items: Vec<T>, kind: &'static str) -> Result<T> {
    items.into_iter().next().ok_or(ApiError::NotFound(kind))
}

/// Scan a list for the element matching `pred`; when several match, the last
/// one wins.
pub fn last_match_or_not_found<T>(
    items: Vec<T>,
    kind: &'static str,
    pred: impl Fn(&T) -> bool,
) -> Result<T> {
    items
        .into_iter()
        .filter(|item| pred(item))
        .last()
        .ok_or(ApiError::NotFound(kind))
}
