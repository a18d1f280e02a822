//! Search client error taxonomy
//!
//! Every failure mode of a search call collapses into one of four
//! categories: a non-2xx status (with the decoded GitHub error body when
//! decoding succeeded), a transport failure, a malformed body, or a
//! success status with no payload. Callers that only need a display
//! string can rely on the `Display` impl.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The JSON body GitHub attaches to client errors
///
/// ```json
/// {"message": "...", "documentation_url": "https://docs.github.com/..."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub message: String,

    /// Link to the relevant docs section, when GitHub provides one
    #[serde(default)]
    pub documentation_url: Option<String>,
}

impl ApiErrorBody {
    /// Render the body as a display message: the message itself, with the
    /// documentation URL on a second line when present.
    pub fn display_message(&self) -> String {
        match &self.documentation_url {
            Some(url) => format!("{}\n{}", self.message, url),
            None => self.message.clone(),
        }
    }
}

/// Errors produced by a [`SearchClient`](crate::SearchClient) call
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// The server answered with a non-success status.
    ///
    /// `body` carries the decoded GitHub error payload when the response
    /// body was decodable; `reason` is the HTTP reason phrase.
    #[error("HTTP {status} {reason}")]
    Status {
        status: u16,
        reason: String,
        body: Option<ApiErrorBody>,
    },

    /// The request never produced an HTTP response (DNS, connect, TLS,
    /// timeout, broken pipe).
    #[error("{0}")]
    Transport(String),

    /// The response arrived but its body did not decode.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// A success status with no payload to decode.
    #[error("empty response body")]
    EmptyBody,
}

impl SearchError {
    /// Status code of this error, when it represents an HTTP status.
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a client rejection (4xx).
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }
}
