//! Error types for the fetch crate.
//!
//! - [`ApiError`] - A 4xx response, carrying the server's `error` message and the status code
//! - [`FetchError`] - Every way a request can fail, including [`ApiError`]
//! - [`TokenError`] - Boxed failure from an [`ApiClient`](crate::ApiClient) token accessor

mod api_error;
mod fetch_error;

pub use api_error::ApiError;
pub use fetch_error::{FetchError, TokenError};
