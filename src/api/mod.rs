//! HTTP API module - preview listing and image endpoints

mod error;
mod previews;

use std::sync::Arc;

use axum::{extract::State, http::Method, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::assets::AssetResolver;
use crate::lookup::LookupService;
pub use error::ApiError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub lookup: LookupService,
    pub assets: Arc<AssetResolver>,
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .nest("/api", previews::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> impl IntoResponse {
    Json(RootResponse {
        name: "previewd",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        songs: state.lookup.song_count(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    songs: usize,
}
