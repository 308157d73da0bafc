use thiserror::Error;

/// An API error reported by the server with a 4xx status.
///
/// The message is the `error` field of the JSON response body and the code is
/// the HTTP status. Displays as the bare message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    code: u16,
}

impl ApiError {
    /// Creates an error with the given message and HTTP status code.
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// Builds the error from a parsed 4xx body.
    ///
    /// A string `error` field is used as-is, any other JSON value is rendered
    /// as JSON text, and a missing field yields an empty message. Bodies
    /// that are not objects (`null`, arrays, scalars) have no `error` field.
    pub(crate) fn from_body(body: &serde_json::Value, code: u16) -> Self {
        let message = match body.get("error") {
            Some(serde_json::Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Self::new(message, code)
    }

    /// The `error` message from the response body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status code of the response.
    pub fn code(&self) -> u16 {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_is_message() {
        let err = ApiError::new("not found", 404);
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.code(), 404);
    }

    #[test]
    fn test_from_body_string_field() {
        let err = ApiError::from_body(&json!({ "error": "bad token" }), 401);
        assert_eq!(err.message(), "bad token");
        assert_eq!(err.code(), 401);
    }

    #[test]
    fn test_from_body_non_string_field() {
        let err = ApiError::from_body(&json!({ "error": { "reason": "quota" } }), 429);
        assert_eq!(err.message(), r#"{"reason":"quota"}"#);
    }

    #[test]
    fn test_from_body_non_object_has_empty_message() {
        let err = ApiError::from_body(&serde_json::Value::Null, 400);
        assert_eq!(err.message(), "");
        assert_eq!(err.code(), 400);

        let err = ApiError::from_body(&json!([1]), 422);
        assert_eq!(err.message(), "");
        assert_eq!(err.code(), 422);
    }

    #[test]
    fn test_from_body_missing_field() {
        let err = ApiError::from_body(&json!({ "detail": "nope" }), 400);
        assert_eq!(err.message(), "");
        assert_eq!(err.code(), 400);
    }
}
