//! The HTTP boundary a [`Fetcher`](crate::Fetcher) sends requests through.

use async_trait::async_trait;

use crate::options::PreparedRequest;

/// Sends a prepared request and returns the server's response.
///
/// The boundary is tied to `reqwest`: implementations return a
/// `reqwest::Response`. Implemented for `reqwest::Client`; wrap a client in
/// your own type to add request middleware. A transport that answers without
/// a connection (a stub or a cache) can build its response from an
/// `http::Response` with `reqwest::Response::from`. The fetcher reads the
/// status, the `hyper::ext::ReasonPhrase` extension when present, and the
/// body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, request: PreparedRequest) -> reqwest::Result<reqwest::Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, url: &str, request: PreparedRequest) -> reqwest::Result<reqwest::Response> {
        let mut builder = self
            .request(request.method.to_reqwest(), url)
            .headers(request.headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        builder.send().await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, url: &str, request: PreparedRequest) -> reqwest::Result<reqwest::Response> {
        (**self).send(url, request).await
    }
}
