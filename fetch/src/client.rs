//! API clients that supply a base URL and an auth token.

use async_trait::async_trait;

use crate::error::TokenError;

/// An API client the [`Fetcher`](crate::Fetcher) can issue authenticated
/// calls for.
///
/// The token is fetched once per call, so implementations that refresh or
/// cache credentials can do so inside [`get_token`](ApiClient::get_token).
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Base URL that endpoints are appended to, e.g. `https://host/api`.
    fn api(&self) -> &str;

    /// Returns the current token, sent verbatim as `Authorization`.
    async fn get_token(&self) -> Result<String, TokenError>;
}

/// An [`ApiClient`] with a fixed base URL and token.
///
/// ## Examples
///
/// ```rust
/// use fetch::{ApiClient, StaticTokenClient};
///
/// let client = StaticTokenClient::new("https://app.example.com/api", "Bearer t0k3n");
/// assert_eq!(client.api(), "https://app.example.com/api");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StaticTokenClient {
    api: String,
    token: String,
}

impl StaticTokenClient {
    /// Creates a client for the base URL `api` that always returns `token`.
    pub fn new(api: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenClient")
            .field("api", &self.api)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl ApiClient for StaticTokenClient {
    fn api(&self) -> &str {
        &self.api
    }

    async fn get_token(&self) -> Result<String, TokenError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_token() {
        let client = StaticTokenClient::new("https://host/api", "secret");
        assert_eq!(client.get_token().await.unwrap(), "secret");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = StaticTokenClient::new("https://host/api", "secret");
        let debug = format!("{client:?}");
        assert!(debug.contains("https://host/api"));
        assert!(!debug.contains("secret"));
    }
}
