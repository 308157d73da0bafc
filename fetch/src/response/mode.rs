use strum::{Display, EnumString};

/// How a successful (non-204) response is handed back to the caller.
///
/// ## Examples
///
/// ```rust
/// use fetch::ResponseMode;
///
/// let mode: ResponseMode = "raw".parse().unwrap();
/// assert_eq!(mode, ResponseMode::Raw);
/// assert_eq!(ResponseMode::default(), ResponseMode::Json);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ResponseMode {
    /// Read the body and parse it as JSON.
    #[default]
    Json,
    /// Return the response unread; the caller consumes the body.
    Raw,
}
