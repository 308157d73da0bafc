use thiserror::Error;

use super::ApiError;

/// Failure returned by an [`ApiClient`](crate::ApiClient) token accessor.
pub type TokenError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by [`Fetcher`](crate::Fetcher) requests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a 4xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered with a 5xx status. The body is not read.
    ///
    /// `status_text` is the reason phrase the server sent, or the standard
    /// one for the status, and may be empty.
    #[error("{}", status_line(.status, .status_text))]
    Server { status: u16, status_text: String },

    /// The transport failed before a response was available, or while
    /// reading the body.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// A response body (error or success) was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// A header name or value could not be encoded.
    #[error("invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The client could not produce an auth token.
    #[error("failed to obtain auth token: {0}")]
    Token(#[source] TokenError),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Builder(#[source] reqwest::Error),
}

/// Formats `"<status> <status_text>"`, or just the status when there is no text.
fn status_line(status: &u16, status_text: &str) -> String {
    if status_text.is_empty() {
        status.to_string()
    } else {
        format!("{status} {status_text}")
    }
}

impl FetchError {
    /// Returns the HTTP status for errors produced from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.code()),
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the domain error if the server answered with a 4xx status.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}
