//! Shared data models for the ytgate backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video metadata records
//! - Download format selection and results
//! - Watch URL construction

pub mod url;
pub mod video;

// Re-export common types
pub use url::{watch_url, YOUTUBE_BASE_URL};
pub use video::{DownloadFormat, DownloadResult, FormatParseError, VideoInfo};
