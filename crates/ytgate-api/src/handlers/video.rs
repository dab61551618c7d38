//! Video API handlers.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use tracing::info;

use ytgate_models::{watch_url, DownloadFormat, VideoInfo};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Return metadata for a YouTube video.
pub async fn get_video_info(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> ApiResult<Json<VideoInfo>> {
    let video_url = watch_url(&video_id);
    let info = state.source.video_info(&video_url).await?;
    Ok(Json(info))
}

/// Download a video as mp3 (audio-only stream) or mp4 (highest resolution).
///
/// The whole payload is buffered before the response begins; there is no
/// range or progressive-streaming support.
pub async fn download_video(
    State(state): State<AppState>,
    Path((video_id, video_format)): Path<(String, String)>,
) -> ApiResult<Response> {
    // Reject unknown formats before any source call
    let format: DownloadFormat = video_format
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Unsupported download format: {video_format}")))?;

    let video_url = watch_url(&video_id);

    // Metadata first: the attachment filename carries the video title
    let video_info = state.source.video_info(&video_url).await?;
    let result = state.source.download(&video_url, format).await?;

    info!(
        video_id = %video_id,
        format = %format,
        size = result.content.len(),
        "Serving download"
    );

    let filename = sanitize_filename(&video_info.title);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, format!("video/{}", result.extension))
        .header(header::CONTENT_LENGTH, result.content.len())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}.{}\"", filename, result.extension),
        )
        .body(Body::from(result.content))
        .map_err(|e| ApiError::internal(format!("Failed to build response: {e}")))
}

/// Strip characters that would break the Content-Disposition header or
/// smuggle path components into the saved filename.
fn sanitize_filename(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' | '\r' | '\n' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "video".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_passthrough() {
        assert_eq!(sanitize_filename("Curso Python #01"), "Curso Python #01");
    }

    #[test]
    fn test_sanitize_filename_strips_header_breakers() {
        assert_eq!(sanitize_filename("a\"b\\c/d"), "a_b_c_d");
        assert_eq!(sanitize_filename("line\r\nbreak"), "line__break");
    }

    #[test]
    fn test_sanitize_filename_empty_fallback() {
        assert_eq!(sanitize_filename(""), "video");
        assert_eq!(sanitize_filename("   "), "video");
    }
}
