//! HTTP verbs accepted by [`RequestOptions`](crate::RequestOptions).

use strum::{Display, EnumIter, EnumString};

/// HTTP method used for a request.
///
/// Parsing is case-insensitive so options read from loosely-typed sources
/// (`"post"`, `"Post"`) still resolve; display is always uppercase.
///
/// ## Examples
///
/// ```rust
/// use fetch::RestMethod;
///
/// let parsed: RestMethod = "delete".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Delete);
/// assert_eq!(parsed.to_string(), "DELETE");
/// assert_eq!(RestMethod::default(), RestMethod::Get);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum RestMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl RestMethod {
    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}
