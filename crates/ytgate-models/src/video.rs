//! Video metadata and download types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Metadata record for a single video.
///
/// Built fresh for every request and discarded after serialization; nothing
/// here is cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Video title
    pub title: String,
    /// Thumbnail image URL
    pub thumbnail: String,
    /// Channel / uploader name
    pub author: String,
    /// Duration in seconds
    pub length: u64,
}

/// Requested download format.
///
/// `Mp3` selects the audio-only stream, `Mp4` the highest-resolution stream.
/// Anything else is rejected before any network call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    Mp3,
    Mp4,
}

impl DownloadFormat {
    /// File extension used for the downloaded payload.
    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Mp3 => "mp3",
            DownloadFormat::Mp4 => "mp4",
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error for a format token outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported download format: {0}")]
pub struct FormatParseError(pub String);

impl FromStr for DownloadFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mp3" => Ok(DownloadFormat::Mp3),
            "mp4" => Ok(DownloadFormat::Mp4),
            other => Err(FormatParseError(other.to_string())),
        }
    }
}

/// Fully buffered media payload plus its file extension.
///
/// Ownership is transient: the bytes live only for the duration of the
/// response write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub content: Vec<u8>,
    pub extension: String,
}

impl DownloadResult {
    pub fn new(content: Vec<u8>, format: DownloadFormat) -> Self {
        Self {
            content,
            extension: format.extension().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("mp3".parse::<DownloadFormat>(), Ok(DownloadFormat::Mp3));
        assert_eq!("mp4".parse::<DownloadFormat>(), Ok(DownloadFormat::Mp4));
        assert_eq!("MP3".parse::<DownloadFormat>(), Ok(DownloadFormat::Mp3));
        assert!("avi".parse::<DownloadFormat>().is_err());
        assert!("".parse::<DownloadFormat>().is_err());
        assert!("mp5".parse::<DownloadFormat>().is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(DownloadFormat::Mp3.extension(), "mp3");
        assert_eq!(DownloadFormat::Mp4.extension(), "mp4");
    }

    #[test]
    fn test_video_info_serialization() {
        let info = VideoInfo {
            title: "Curso Python #01 - Seja um Programador".to_string(),
            thumbnail: "https://i.ytimg.com/vi/S9uPNppGsGo/hq720.jpg".to_string(),
            author: "Curso em Vídeo".to_string(),
            length: 1747,
        };

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["title"], "Curso Python #01 - Seja um Programador");
        assert_eq!(json["thumbnail"], "https://i.ytimg.com/vi/S9uPNppGsGo/hq720.jpg");
        assert_eq!(json["author"], "Curso em Vídeo");
        assert_eq!(json["length"], 1747);
        assert_eq!(json.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_download_result_extension_follows_format() {
        let result = DownloadResult::new(vec![1, 2, 3], DownloadFormat::Mp3);
        assert_eq!(result.extension, "mp3");
        assert_eq!(result.content, vec![1, 2, 3]);

        let result = DownloadResult::new(Vec::new(), DownloadFormat::Mp4);
        assert_eq!(result.extension, "mp4");
    }
}
