//! Application state.

use std::sync::Arc;

use ytgate_source::{VideoSource, YtDlpSource};

use crate::config::ApiConfig;

/// Shared application state.
///
/// Requests are independent and stateless; the only shared piece is the
/// video source handle, which holds no per-request state itself.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub source: Arc<dyn VideoSource>,
}

impl AppState {
    /// Create application state backed by the yt-dlp source.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            source: Arc::new(YtDlpSource::new()),
        }
    }

    /// Create application state with a custom video source.
    pub fn with_source(config: ApiConfig, source: Arc<dyn VideoSource>) -> Self {
        Self { config, source }
    }
}
