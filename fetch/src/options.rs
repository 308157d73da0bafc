//! Per-request options and the immutable request they prepare.
//!
//! [`RequestOptions`] is what callers build. [`RequestOptions::prepare`]
//! consumes it and produces a [`PreparedRequest`]: the `json` value has been
//! serialized into the body, the token has become the `Authorization`
//! header, and neither field exists on the result.

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::error::FetchError;
use crate::method::RestMethod;
use crate::response::ResponseMode;

/// Options for a single request.
///
/// ## Examples
///
/// ```rust
/// use fetch::{RequestOptions, RestMethod};
/// use serde_json::json;
///
/// let options = RequestOptions::new()
///     .method(RestMethod::Post)
///     .json(json!({ "name": "device-1" }))
///     .token("session-token");
///
/// let prepared = options.prepare().unwrap();
/// assert_eq!(prepared.headers["content-type"], "application/json");
/// assert_eq!(prepared.headers["authorization"], "session-token");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// HTTP method. Defaults to `GET`.
    pub method: RestMethod,
    /// Extra headers. Names are case-insensitive; a later entry replaces an
    /// earlier one with the same name.
    pub headers: Vec<(String, String)>,
    /// Query string pairs appended to the URL.
    pub query: Vec<(String, String)>,
    /// Request body, sent unchanged unless `json` is set.
    pub body: Option<Bytes>,
    /// JSON value to serialize as the body. Takes precedence over `body` and
    /// sets `Content-Type: application/json`.
    pub json: Option<serde_json::Value>,
    /// Sent verbatim as the `Authorization` header (no scheme prefix).
    pub token: Option<String>,
    /// How a successful response is returned.
    pub response: ResponseMode,
}

impl RequestOptions {
    /// Creates empty options: `GET`, no headers, no body, JSON response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: RestMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a header. A later header with the same name replaces this one.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends a query string pair.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets the raw body, sent unchanged unless a JSON value is also set.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a JSON value to send as the body with `Content-Type: application/json`.
    pub fn json(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.json = Some(value.into());
        self
    }

    /// Serializes `value` and sets it as the JSON body.
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::Json`] if `value` cannot be represented as JSON
    /// (for example a map with non-string keys).
    pub fn serialize_json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, FetchError> {
        let value = serde_json::to_value(value)?;
        Ok(self.json(value))
    }

    /// Sets the token sent verbatim as the `Authorization` header.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets how a successful response is returned.
    pub fn response(mut self, mode: ResponseMode) -> Self {
        self.response = mode;
        self
    }

    /// Shorthand for `.response(ResponseMode::Raw)`.
    pub fn raw(self) -> Self {
        self.response(ResponseMode::Raw)
    }

    /// Resolves the options into the request handed to the transport.
    ///
    /// Caller headers are applied first, then `Content-Type` (when `json` is
    /// set), then `Authorization` (when `token` is set), so the last two
    /// always win over a caller-supplied header of the same name.
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::InvalidHeader`] if a header name or value, or
    /// the token, is not valid in an HTTP header.
    pub fn prepare(self) -> Result<PreparedRequest, FetchError> {
        let mut headers = HeaderMap::with_capacity(self.headers.len() + 2);
        for (name, value) in &self.headers {
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| FetchError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value(name, value)?);
        }

        let mut body = self.body;
        if let Some(json) = self.json {
            body = Some(Bytes::from(json.to_string()));
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(token) = &self.token {
            let mut value = header_value(AUTHORIZATION.as_str(), token)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(PreparedRequest {
            method: self.method,
            headers,
            query: self.query,
            body,
            response: self.response,
        })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::try_from(value).map_err(|e| FetchError::InvalidHeader {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// A fully resolved request, ready for a [`Transport`](crate::Transport).
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: RestMethod,
    /// Final headers, including `Content-Type` and `Authorization` when set.
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    /// Caller body, or the serialized JSON value.
    pub body: Option<Bytes>,
    /// Not sent; read by the fetcher when interpreting the response.
    pub response: ResponseMode,
}
