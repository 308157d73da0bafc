//! Response handling module.
//!
//! [`ResponseMode`] selects how a successful response is returned, and
//! [`FetchResponse`] is the shape every successful request resolves to.

mod mode;
mod value;

pub use mode::ResponseMode;
pub use value::FetchResponse;
