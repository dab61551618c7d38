//! Video metadata and download using yt-dlp.
//!
//! Metadata comes from `yt-dlp --dump-json`; downloads are written to stdout
//! with `-o -` and buffered fully in memory before the caller sees them.

use std::process::Stdio;

use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info};

use ytgate_models::{DownloadFormat, DownloadResult, VideoInfo};

use crate::error::{SourceError, SourceResult};
use crate::VideoSource;

/// Format selector for the audio-only stream (mp3 path).
const AUDIO_ONLY_SELECTOR: &str = "bestaudio/best";

/// Format selector for the highest-resolution combined stream (mp4 path).
const HIGHEST_RESOLUTION_SELECTOR: &str = "best[ext=mp4]/best";

/// Video source backed by the `yt-dlp` CLI.
#[derive(Debug, Clone, Default)]
pub struct YtDlpSource;

impl YtDlpSource {
    pub fn new() -> Self {
        Self
    }
}

/// Fields of interest from `yt-dlp --dump-json` output.
#[derive(Debug, Deserialize)]
struct RawMetadata {
    title: Option<String>,
    thumbnail: Option<String>,
    uploader: Option<String>,
    channel: Option<String>,
    duration: Option<f64>,
}

impl RawMetadata {
    /// Assemble the metadata record, treating each absent field as a key
    /// lookup failure.
    fn into_video_info(self) -> SourceResult<VideoInfo> {
        let title = self.title.ok_or_else(|| SourceError::missing_key("title"))?;
        let thumbnail = self
            .thumbnail
            .ok_or_else(|| SourceError::missing_key("thumbnail"))?;
        let author = self
            .uploader
            .or(self.channel)
            .ok_or_else(|| SourceError::missing_key("uploader"))?;
        let length = self
            .duration
            .ok_or_else(|| SourceError::missing_key("duration"))?;

        Ok(VideoInfo {
            title,
            thumbnail,
            author,
            length: length.round() as u64,
        })
    }
}

/// Classify a failed yt-dlp run into the source error taxonomy.
///
/// The detail carried forward is the last non-empty stderr line, which is
/// where yt-dlp puts its human-readable error.
fn classify_failure(stderr: &str) -> SourceError {
    let detail = stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("unknown error")
        .to_string();

    let lower = stderr.to_ascii_lowercase();

    if lower.contains("private video") {
        SourceError::Private(detail)
    } else if lower.contains("sign in to confirm your age") || lower.contains("age-restricted") {
        SourceError::AgeRestricted(detail)
    } else if lower.contains("video unavailable") || lower.contains("is unavailable") {
        SourceError::Unavailable(detail)
    } else if lower.contains("is not a valid url")
        || lower.contains("incomplete youtube id")
        || lower.contains("truncated id")
        || lower.contains("unsupported url")
    {
        SourceError::ParseFailed(detail)
    } else {
        SourceError::Extraction(detail)
    }
}

/// Run yt-dlp with the given arguments and return its stdout.
async fn run_ytdlp(args: &[&str]) -> SourceResult<Vec<u8>> {
    which::which("yt-dlp").map_err(|_| SourceError::YtDlpNotFound)?;

    let output = Command::new("yt-dlp")
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("yt-dlp stderr: {}", stderr);
        return Err(classify_failure(&stderr));
    }

    Ok(output.stdout)
}

#[async_trait::async_trait]
impl VideoSource for YtDlpSource {
    async fn video_info(&self, url: &str) -> SourceResult<VideoInfo> {
        info!(url = %url, "Fetching video metadata");

        let stdout = run_ytdlp(&[
            "--dump-json",
            "--no-playlist",
            "--skip-download",
            url,
        ])
        .await?;

        let raw: RawMetadata = serde_json::from_slice(&stdout)?;
        let video_info = raw.into_video_info()?;

        info!(
            url = %url,
            title = %video_info.title,
            length = video_info.length,
            "Resolved video metadata"
        );

        Ok(video_info)
    }

    async fn download(&self, url: &str, format: DownloadFormat) -> SourceResult<DownloadResult> {
        let selector = match format {
            DownloadFormat::Mp3 => AUDIO_ONLY_SELECTOR,
            DownloadFormat::Mp4 => HIGHEST_RESOLUTION_SELECTOR,
        };

        info!(url = %url, format = %format, "Downloading stream");

        let content = run_ytdlp(&["-f", selector, "--no-playlist", "-o", "-", url]).await?;

        if content.is_empty() {
            return Err(SourceError::EmptyContent(url.to_string()));
        }

        info!(
            url = %url,
            format = %format,
            size_mb = content.len() as f64 / (1024.0 * 1024.0),
            "Downloaded stream successfully"
        );

        Ok(DownloadResult::new(content, format))
    }
}
