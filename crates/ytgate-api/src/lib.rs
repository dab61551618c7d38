//! Axum HTTP API server.
//!
//! This crate provides:
//! - `/api/video/info/{video_id}` and `/api/video/download/{video_id}/{video_format}`
//! - Translation of video source errors to HTTP statuses
//! - CORS, request IDs and request logging

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
