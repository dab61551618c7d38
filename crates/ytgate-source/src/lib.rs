//! Video source collaborator for the ytgate backend.
//!
//! This crate owns the boundary to the external extractor. Everything the
//! service knows about YouTube — page parsing, stream selection, the raw
//! bytes themselves — comes through the [`VideoSource`] trait, implemented
//! here by [`YtDlpSource`] on top of the `yt-dlp` CLI.

pub mod error;
pub mod ytdlp;

pub use error::{SourceError, SourceResult};
pub use ytdlp::YtDlpSource;

use async_trait::async_trait;
use ytgate_models::{DownloadFormat, DownloadResult, VideoInfo};

/// Capability to resolve video metadata and download streams.
///
/// Each call performs a fresh fetch; implementations hold no per-video state.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Parse the watch page behind `url` and return its metadata.
    async fn video_info(&self, url: &str) -> SourceResult<VideoInfo>;

    /// Select the stream matching `format` and buffer it fully into memory.
    async fn download(&self, url: &str, format: DownloadFormat) -> SourceResult<DownloadResult>;
}
