use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// HTTP error response representation with security-conscious design.
///
/// Serializes to the single-field `{"error": ...}` body this API exposes.
/// The message is always one of the fixed per-condition strings; internal
/// failure detail stays in the logs.
#[must_use = "error responses do nothing unless serialized"]
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse<'a> {
    /// User-facing error message safe for client display.
    #[schema(value_type = String)]
    pub error: Cow<'a, str>,
    /// HTTP status code (not serialized in JSON).
    #[serde(skip)]
    #[schema(ignore)]
    pub status: StatusCode,
}

impl<'a> ErrorResponse<'a> {
    // 4xx Client Errors
    pub const BAD_REQUEST: Self = Self::new(
        "the request could not be processed due to invalid data",
        StatusCode::BAD_REQUEST,
    );
    pub const MISSING_FILE_NAME: Self = Self::new(
        "file name is required in the URL, e.g. ?file=name.pdf",
        StatusCode::BAD_REQUEST,
    );
    pub const NOT_FOUND: Self = Self::new(
        "the requested resource was not found",
        StatusCode::NOT_FOUND,
    );
    // 5xx Server Errors
    pub const INTERNAL_SERVER_ERROR: Self = Self::new(
        "an internal server error occurred; please try again later",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const MISSING_BUCKET_CONFIG: Self = Self::new(
        "S3 bucket name is not configured in environment variables",
        StatusCode::INTERNAL_SERVER_ERROR,
    );
    pub const SIGNING_FAILURE: Self = Self::new(
        "could not generate the link; verify the file name is correct",
        StatusCode::INTERNAL_SERVER_ERROR,
    );

    /// Creates a new error response.
    #[inline]
    pub const fn new(error: &'a str, status: StatusCode) -> Self {
        Self {
            error: Cow::Borrowed(error),
            status,
        }
    }

    /// Replaces the user-facing message.
    pub fn with_error(mut self, error: impl Into<Cow<'a, str>>) -> Self {
        self.error = error.into();
        self
    }
}

impl Default for ErrorResponse<'_> {
    #[inline]
    fn default() -> Self {
        Self::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ErrorResponse<'_> {
    #[inline]
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_is_single_field() {
        let response = ErrorResponse::MISSING_FILE_NAME;
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(
            json,
            r#"{"error":"file name is required in the URL, e.g. ?file=name.pdf"}"#
        );
    }

    #[test]
    fn status_is_not_serialized() {
        let response = ErrorResponse::SIGNING_FAILURE;
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("status"));
        assert!(!json.contains("500"));
    }

    #[test]
    fn with_error_replaces_message() {
        let response = ErrorResponse::INTERNAL_SERVER_ERROR.with_error("Request timeout");
        assert_eq!(&response.error, "Request timeout");
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn fixed_messages_match_the_wire_contract() {
        assert_eq!(
            &ErrorResponse::MISSING_BUCKET_CONFIG.error,
            "S3 bucket name is not configured in environment variables"
        );
        assert_eq!(
            &ErrorResponse::SIGNING_FAILURE.error,
            "could not generate the link; verify the file name is correct"
        );
    }
}
