//! Error type of the API client layer and its mapping to user-facing text.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Unauthenticated,

    #[error("request failed: {0}")]
    Network(String),

    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("unexpected response shape (key: {})", .key.as_deref().unwrap_or("-"))]
    UnexpectedShape { key: Option<String> },
}

impl ApiError {
    /// Builds a status error, preferring the backend's own `message` or
    /// `error` field over the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| {
                ["message", "error"]
                    .iter()
                    .find_map(|k| v.get(*k).and_then(Value::as_str).map(str::to_string))
            })
            .unwrap_or_else(|| body.trim().to_string());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the session is gone and the user has to sign in again.
    pub fn ends_session(&self) -> bool {
        matches!(self, ApiError::Unauthenticated) || self.status() == Some(401)
    }

    /// Text shown in the page's error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthenticated => "Your session has ended. Please sign in again.".into(),
            ApiError::Network(_) => {
                "Cannot reach the server. Check your connection and try again.".into()
            }
            ApiError::Status { status, message } => match *status {
                401 => "Your session has ended. Please sign in again.".into(),
                403 => "You do not have permission to do this.".into(),
                404 => "The record was not found. It may have been deleted.".into(),
                409 => with_detail("This change conflicts with existing data", message),
                400 | 422 => with_detail("Some fields are invalid", message),
                s if s >= 500 => "The server failed to process the request. Try again later.".into(),
                _ => with_detail(&format!("Request failed ({status})"), message),
            },
            ApiError::Decode(_) | ApiError::UnexpectedShape { .. } => {
                "The server sent data in an unexpected format.".into()
            }
        }
    }
}

fn with_detail(prefix: &str, detail: &str) -> String {
    if detail.is_empty() {
        format!("{prefix}.")
    } else {
        format!("{prefix}: {detail}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_reads_message_field() {
        let err = ApiError::from_status(422, r#"{"status": "fail", "message": "price must be positive"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 422,
                message: "price must be positive".into()
            }
        );
        assert_eq!(err.user_message(), "Some fields are invalid: price must be positive");
    }

    #[test]
    fn test_from_status_falls_back_to_error_field_and_body() {
        let err = ApiError::from_status(409, r#"{"error": "sku already exists"}"#);
        assert_eq!(err.user_message(), "This change conflicts with existing data: sku already exists");

        let plain = ApiError::from_status(418, " teapot ");
        assert_eq!(plain.user_message(), "Request failed (418): teapot");
    }

    #[test]
    fn test_user_messages_by_status() {
        assert!(ApiError::from_status(401, "").user_message().contains("sign in"));
        assert!(ApiError::from_status(403, "").user_message().contains("permission"));
        assert!(ApiError::from_status(404, "").user_message().contains("not found"));
        assert!(ApiError::from_status(503, "").user_message().contains("server"));
        assert_eq!(
            ApiError::from_status(400, "").user_message(),
            "Some fields are invalid."
        );
    }

    #[test]
    fn test_shape_errors_share_message() {
        let shape = ApiError::UnexpectedShape { key: Some("product".into()) };
        assert_eq!(shape.to_string(), "unexpected response shape (key: product)");
        assert_eq!(shape.user_message(), ApiError::Decode("x".into()).user_message());
        assert_eq!(shape.status(), None);
    }

    #[test]
    fn test_ends_session() {
        assert!(ApiError::Unauthenticated.ends_session());
        assert!(ApiError::from_status(401, "").ends_session());
        assert!(!ApiError::from_status(403, "").ends_session());
        assert!(!ApiError::Network("offline".into()).ends_session());
    }
}
