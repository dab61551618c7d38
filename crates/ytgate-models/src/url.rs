//! Watch URL construction.
//!
//! The service accepts bare video identifiers and only ever produces the
//! canonical watch-page URL shape. Identifier validation is left to the
//! video source; a malformed identifier surfaces as a parse failure there.

/// Base URL for YouTube watch pages.
pub const YOUTUBE_BASE_URL: &str = "https://www.youtube.com/watch?v=";

/// Build the canonical watch-page URL for a video identifier.
pub fn watch_url(video_id: &str) -> String {
    format!("{YOUTUBE_BASE_URL}{video_id}")
}
