//! Minimal request helper for JSON APIs.
//!
//! Wraps an HTTP transport to add:
//!
//! - bearer-token authorization, sent verbatim as the `Authorization` header
//! - JSON request encoding (`json` option) and JSON response decoding
//! - normalized errors: 4xx becomes an [`ApiError`] carrying the body's
//!   `error` message and the status code, 5xx becomes
//!   [`FetchError::Server`] (`"503 Service Unavailable"`)
//!
//! ## Core Types
//!
//! - [`Fetcher`] - Performs requests, plain or on behalf of an [`ApiClient`]
//! - [`RequestOptions`] - Per-request method, headers, body, JSON, token and response mode
//! - [`FetchResponse`] - `Empty` (204), `Raw` (unread response) or `Json`
//! - [`Transport`] - The HTTP boundary, implemented for `reqwest::Client`
//!
//! ## Helpers
//!
//! - [`delay()`] / [`delay_for()`] - Resolve after a fixed time
//!
//! ## Examples
//!
//! ```rust,ignore
//! use fetch::{Fetcher, RequestOptions, StaticTokenClient};
//!
//! let fetcher = Fetcher::new()?;
//! let client = StaticTokenClient::new("https://app.example.com/api/v1", token);
//!
//! let projects = fetcher
//!     .perform_authenticated(&client, "/projects", RequestOptions::new())
//!     .await?
//!     .deserialize::<Vec<Project>>()
//!     .await?;
//! ```

mod client;
mod delay;
pub mod error;
mod fetcher;
mod method;
mod options;
pub mod response;
mod transport;

pub use client::{ApiClient, StaticTokenClient};
pub use delay::{delay, delay_for};
pub use error::{ApiError, FetchError, TokenError};
pub use fetcher::{Fetcher, FetcherBuilder};
pub use method::RestMethod;
pub use options::{PreparedRequest, RequestOptions};
pub use response::{FetchResponse, ResponseMode};
pub use transport::Transport;
