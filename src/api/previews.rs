//! Preview endpoints
//!
//! GET /api/previews                      - Full preview index
//! GET /api/preview/{id}                  - Previews for one song
//! GET /api/preview/{id}/{filename}       - Preview image bytes

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio_util::io::ReaderStream;

use super::{ApiError, AppState};

/// Build the previews router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/previews", get(list_previews))
        .route("/preview/{id}", get(get_preview))
        .route("/preview/{id}/{filename}", get(get_preview_image))
}

/// Serve the whole index
async fn list_previews(State(state): State<AppState>) -> Response {
    let index = state.lookup.get_all();
    Json(index).into_response()
}

/// Serve one song's previews
async fn get_preview(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let previews = state.lookup.get_one(&id)?;
    Ok(Json(previews).into_response())
}

/// Stream a preview image from the asset directory
async fn get_preview_image(
    Path((id, filename)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let asset = state.assets.resolve(&id, &filename).await?;
    let body = Body::from_stream(ReaderStream::new(asset.file));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, asset.content_type.to_string()),
            (header::CONTENT_LENGTH, asset.len.to_string()),
            (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        ],
        body,
    )
        .into_response())
}
