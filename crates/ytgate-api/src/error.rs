//! API error types and video source error translation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use ytgate_source::SourceError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing detail string for the response body.
    fn detail(&self) -> String {
        match self {
            ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Internal(msg) => msg.clone(),
        }
    }
}

/// Translate a video source failure into an HTTP error.
///
/// Total over the source taxonomy: every error kind maps to exactly one
/// status/message pair, and anything outside the named content-state kinds
/// falls through to 500.
impl From<SourceError> for ApiError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Unavailable(detail) => {
                ApiError::NotFound(format!("Video not available: {detail}"))
            }
            SourceError::NotFound(detail) => {
                ApiError::NotFound(format!("Video not found: {detail}"))
            }
            SourceError::AgeRestricted(detail) => {
                ApiError::Forbidden(format!("Video age-restricted: {detail}"))
            }
            SourceError::Private(detail) => ApiError::Forbidden(format!("Video private: {detail}")),
            other => ApiError::Internal(format!("Error obtaining video information: {other}")),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            detail: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translated(err: SourceError) -> (StatusCode, String) {
        let api_err = ApiError::from(err);
        (api_err.status_code(), api_err.detail())
    }

    #[test]
    fn test_unavailable_maps_to_404() {
        let (status, detail) = translated(SourceError::Unavailable("gone".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, "Video not available: gone");
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, detail) = translated(SourceError::NotFound("'duration'".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(detail, "Video not found: 'duration'");
    }

    #[test]
    fn test_age_restricted_maps_to_403() {
        let (status, detail) = translated(SourceError::AgeRestricted("sign in".to_string()));
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(detail, "Video age-restricted: sign in");
    }

    #[test]
    fn test_private_maps_to_403() {
        let (status, detail) = translated(SourceError::Private("private".to_string()));
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(detail, "Video private: private");
    }

    #[test]
    fn test_everything_else_maps_to_500() {
        let generic_errors = vec![
            SourceError::Extraction("boom".to_string()),
            SourceError::ParseFailed("regex_search: could not find match".to_string()),
            SourceError::EmptyContent("https://example".to_string()),
            SourceError::YtDlpNotFound,
            SourceError::Io(std::io::Error::other("io")),
        ];

        for err in generic_errors {
            let (status, detail) = translated(err);
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(detail.starts_with("Error obtaining video information: "));
        }
    }

    #[test]
    fn test_parse_failure_detail_survives_translation() {
        let (_, detail) = translated(SourceError::ParseFailed(
            "regex_search: could not find match for (?:v=|\\/)([0-9A-Za-z_-]{11}).*".to_string(),
        ));
        assert!(detail.contains("regex_search"));
    }
}
