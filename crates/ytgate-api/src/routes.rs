//! API routes.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::handlers::health::health;
use crate::handlers::video::{download_video, get_video_info};
use crate::middleware::{cors_layer, request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let video_routes = Router::new()
        .route("/video/info/:video_id", get(get_video_info))
        .route(
            "/video/download/:video_id/:video_format",
            get(download_video),
        );

    let health_routes = Router::new()
        .route("/health", get(health))
        .route("/healthz", get(health));

    Router::new()
        .nest("/api", video_routes)
        .merge(health_routes)
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}
