//! Request execution with tracing instrumentation.
//!
//! [`Fetcher`] issues a single request through a [`Transport`], applying the
//! JSON and token options, and turns the response into a [`FetchResponse`]
//! or a [`FetchError`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use tracing::{debug, instrument, warn, Span};

use crate::client::ApiClient;
use crate::error::{ApiError, FetchError};
use crate::options::RequestOptions;
use crate::response::{FetchResponse, ResponseMode};
use crate::transport::Transport;

/// Default `User-Agent` sent by clients built with [`FetcherBuilder`].
const DEFAULT_USER_AGENT: &str = concat!("fetch/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a [`Fetcher`] backed by `reqwest`.
#[derive(Debug)]
pub struct FetcherBuilder {
    timeout: Option<Duration>,
    user_agent: String,
    default_headers: HeaderMap,
}

impl FetcherBuilder {
    fn new() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: HeaderMap::new(),
        }
    }

    /// Sets a total request timeout. Requests have no timeout by default.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let fetcher = Fetcher::builder()
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the `User-Agent` header. Defaults to `fetch/<version>`.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Per-request headers from [`RequestOptions`] replace a default header
    /// of the same name.
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::InvalidHeader`] if the header name or value is
    /// invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, FetchError> {
        let invalid = |reason: String| FetchError::InvalidHeader {
            name: name.as_ref().to_string(),
            reason,
        };
        let header_name =
            HeaderName::try_from(name.as_ref()).map_err(|e| invalid(e.to_string()))?;
        let header_value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| invalid(e.to_string()))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Builds the [`Fetcher`].
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::Builder`] if the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<Fetcher, FetchError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .default_headers(self.default_headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchError::Builder)?;

        Ok(Fetcher::with_transport(client))
    }
}

/// Issues requests with JSON encoding, token auth, and status handling.
///
/// Cloning is cheap when the transport is (`reqwest::Client` is a handle).
/// Each call takes its own [`RequestOptions`], so concurrent calls share no
/// state.
///
/// ## Examples
///
/// ```rust,ignore
/// use fetch::{Fetcher, RequestOptions, RestMethod, StaticTokenClient};
/// use serde_json::json;
///
/// let fetcher = Fetcher::new()?;
/// let client = StaticTokenClient::new("https://app.example.com/api/v1", token);
///
/// let created = fetcher
///     .perform_authenticated(
///         &client,
///         "/projects",
///         RequestOptions::new().method(RestMethod::Post).json(json!({ "name": "demo" })),
///     )
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher<T = reqwest::Client> {
    transport: T,
}

impl Fetcher {
    /// Creates a new builder for configuring a `reqwest`-backed fetcher.
    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    /// Creates a fetcher with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, FetchError> {
        Self::builder().build()
    }
}

impl<T: Transport> Fetcher<T> {
    /// Creates a fetcher that sends requests through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Performs one request against `url`.
    ///
    /// - `204` resolves to [`FetchResponse::Empty`] without reading the body.
    /// - `4xx` reads the body as JSON and fails with [`FetchError::Api`],
    ///   using the body's `error` field as the message.
    /// - `5xx` and above fails with [`FetchError::Server`]; the body is not
    ///   read.
    /// - Anything else resolves to the parsed JSON body, or to the unread
    ///   response when `options.response` is [`ResponseMode::Raw`].
    ///
    /// ## Errors
    ///
    /// Besides the status errors above, transport failures surface as
    /// [`FetchError::Transport`] and unparsable bodies as
    /// [`FetchError::Json`]. Nothing is retried.
    #[instrument(
        name = "fetch_request",
        skip_all,
        fields(
            http.method = tracing::field::Empty,
            http.url = url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn perform(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> Result<FetchResponse, FetchError> {
        let request = options.prepare()?;
        let mode = request.response;
        Span::current().record("http.method", request.method.to_string().as_str());

        let response = self.transport.send(url, request).await.map_err(|e| {
            Span::current().record("otel.status_code", "ERROR");
            warn!(error = %e, "Request failed");
            FetchError::Transport(e)
        })?;

        Span::current().record("http.status_code", response.status().as_u16());

        interpret(response, mode).await
    }

    /// Performs one request against `client.api() + endpoint` using the
    /// client's current token.
    ///
    /// The URL is a plain concatenation, so `endpoint` should start with `/`
    /// when the base URL does not end with one.
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::Token`] without sending anything if the token
    /// cannot be obtained; otherwise the same errors as [`perform`](Self::perform).
    #[instrument(name = "fetch_authenticated", skip_all, fields(endpoint = endpoint))]
    pub async fn perform_authenticated<C>(
        &self,
        client: &C,
        endpoint: &str,
        mut options: RequestOptions,
    ) -> Result<FetchResponse, FetchError>
    where
        C: ApiClient + ?Sized,
    {
        let token = client.get_token().await.map_err(|e| {
            warn!(error = %e, "Token lookup failed");
            FetchError::Token(e)
        })?;
        options.token = Some(token);

        let url = format!("{}{}", client.api(), endpoint);
        self.perform(&url, options).await
    }
}

/// The reason phrase the server sent, or the standard one for the status.
fn status_text(response: &reqwest::Response) -> String {
    if let Some(reason) = response.extensions().get::<hyper::ext::ReasonPhrase>() {
        return String::from_utf8_lossy(reason.as_bytes()).into_owned();
    }
    response
        .status()
        .canonical_reason()
        .unwrap_or_default()
        .to_string()
}

/// Maps a response to the caller-facing result according to its status.
async fn interpret(
    response: reqwest::Response,
    mode: ResponseMode,
) -> Result<FetchResponse, FetchError> {
    let status = response.status();
    let code = status.as_u16();

    if status == StatusCode::NO_CONTENT {
        Span::current().record("otel.status_code", "OK");
        debug!("Request completed with no content");
        return Ok(FetchResponse::Empty);
    }

    if status.is_client_error() {
        Span::current().record("otel.status_code", "UNSET");
        let body = response.bytes().await.map_err(FetchError::Transport)?;
        let body: serde_json::Value = serde_json::from_slice(&body)?;
        let error = ApiError::from_body(&body, code);
        warn!(http.status_code = code, api.message = error.message(), "API returned error");
        return Err(error.into());
    }

    if code >= 500 {
        Span::current().record("otel.status_code", "ERROR");
        let status_text = status_text(&response);
        warn!(http.status_code = code, "Server returned error");
        return Err(FetchError::Server {
            status: code,
            status_text,
        });
    }

    Span::current().record("otel.status_code", "OK");
    match mode {
        ResponseMode::Raw => {
            debug!("Request completed, returning raw response");
            Ok(FetchResponse::Raw(response))
        }
        ResponseMode::Json => {
            let body = response.bytes().await.map_err(FetchError::Transport)?;
            let value = serde_json::from_slice(&body)?;
            debug!("Request completed");
            Ok(FetchResponse::Json(value))
        }
    }
}
