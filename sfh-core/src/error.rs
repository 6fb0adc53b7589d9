/// Error types for Smart Farm Hub backend calls
use serde::Deserialize;
use thiserror::Error;

/// Main error type for backend operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// The body was missing or was not the JSON we expected
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Client-side form validation rejected the input
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Build a status error from a raw response body, preferring the
    /// server's `{ "message": ... }` when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Status { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_uses_server_message() {
        let err = ApiError::from_status(400, r#"{"message": "group not found"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: "group not found".to_string()
            }
        );
        assert_eq!(err.user_message(), "group not found");
    }

    #[test]
    fn status_error_without_json_body() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), "HTTP 502");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_detection() {
        assert!(ApiError::from_status(404, "{}").is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }
}
