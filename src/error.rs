//! Error types for the studio dashboard.
//!
//! Uses thiserror for ergonomic error definitions that integrate
//! with axum's response system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Record store errors
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-success status; the message is the raw response body.
    #[error("{body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    // Generic errors
    #[error("Unbekannter Fehler")]
    Unknown,

    #[error("Template error: {0}")]
    Template(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 404
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            // 502
            Self::Transport(_) | Self::Status { .. } | Self::Decode(_) => StatusCode::BAD_GATEWAY,

            // 500
            Self::Unknown | Self::Template(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Status { .. } => "UPSTREAM_STATUS",
            Self::Decode(_) => "DECODE_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unknown => "UNKNOWN_ERROR",
            Self::Template(_) => "TEMPLATE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

// Convenience conversions
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(format!("JSON parsing error: {}", err))
    }
}

impl From<tera::Error> for Error {
    fn from(err: tera::Error) -> Self {
        Self::Template(format!("{:?}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_is_body_text() {
        let err = Error::Status {
            status: 500,
            body: "record store unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "record store unavailable");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = Error::NotFound("courses 68a0b1c2d3e4f5a6b7c8d9e0".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_unknown_error_message() {
        assert_eq!(Error::Unknown.to_string(), "Unbekannter Fehler");
        assert_eq!(Error::Unknown.error_code(), "UNKNOWN_ERROR");
    }
}
