use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// The result of a successful request.
#[derive(Debug)]
pub enum FetchResponse {
    /// The server answered `204 No Content`. The body was never read.
    Empty,
    /// The unread response, returned in [`ResponseMode::Raw`](crate::ResponseMode::Raw).
    Raw(reqwest::Response),
    /// The parsed JSON body.
    Json(serde_json::Value),
}

impl FetchResponse {
    /// Returns `true` for a `204 No Content` result.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the parsed body of a `Json` result.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Takes the parsed body of a `Json` result.
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Takes the unread response of a `Raw` result.
    pub fn into_raw(self) -> Option<reqwest::Response> {
        match self {
            Self::Raw(response) => Some(response),
            _ => None,
        }
    }

    /// Deserializes the result into `T`.
    ///
    /// `Empty` yields `None`. A raw response has its body read first.
    ///
    /// ## Errors
    ///
    /// Returns [`FetchError::Json`] if the body does not match `T`, or
    /// [`FetchError::Transport`] if a raw body cannot be read.
    pub async fn deserialize<T: DeserializeOwned>(self) -> Result<Option<T>, FetchError> {
        match self {
            Self::Empty => Ok(None),
            Self::Json(value) => Ok(Some(serde_json::from_value(value)?)),
            Self::Raw(response) => {
                let body = response.bytes().await.map_err(FetchError::Transport)?;
                Ok(Some(serde_json::from_slice(&body)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Instance {
        id: String,
        state: String,
    }

    #[tokio::test]
    async fn test_deserialize_json() {
        let response = FetchResponse::Json(json!({ "id": "i-1", "state": "on" }));
        let instance: Option<Instance> = response.deserialize().await.unwrap();
        assert_eq!(
            instance,
            Some(Instance {
                id: "i-1".to_string(),
                state: "on".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_deserialize_empty_is_none() {
        let instance: Option<Instance> = FetchResponse::Empty.deserialize().await.unwrap();
        assert!(instance.is_none());
    }

    #[tokio::test]
    async fn test_deserialize_shape_mismatch() {
        let response = FetchResponse::Json(json!({ "id": 7 }));
        let result = response.deserialize::<Instance>().await;
        assert!(matches!(result, Err(FetchError::Json(_))));
    }

    #[test]
    fn test_accessors() {
        let response = FetchResponse::Json(json!([1, 2]));
        assert!(!response.is_empty());
        assert_eq!(response.as_json(), Some(&json!([1, 2])));
        assert!(FetchResponse::Empty.into_json().is_none());
        assert!(FetchResponse::Empty.into_raw().is_none());
    }
}
