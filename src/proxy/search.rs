/// Provider proxy routes
/// The only place that sees provider credentials; the resolver reaches providers through here

use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, warn};

use crate::error::AppError;
use crate::services::pixabay::pixabay_search;
use crate::services::unsplash::{is_unsplash_location, unsplash_search, unsplash_track_download};
use crate::state::AppState;
use crate::types::image::{SearchRequest, SearchResponse, TrackRequest};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/proxy/unsplash/search", post(unsplash_proxy))
        .route("/api/proxy/pixabay/search", post(pixabay_proxy))
        .route("/api/proxy/unsplash/track", post(unsplash_track))
}

fn validate(req: &SearchRequest) -> Result<(), AppError> {
    if req.query.trim().is_empty() {
        return Err(AppError::BadRequest("query must not be empty".into()));
    }
    if req.per_page == 0 {
        return Err(AppError::BadRequest("per_page must be at least 1".into()));
    }
    Ok(())
}

async fn unsplash_proxy(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    validate(&req)?;
    let photos = unsplash_search(&state.http, &state.config, &req.query, req.per_page)
        .await
        .inspect_err(|e| warn!("[PROXY] unsplash {:?}: {}", req.query, e))?;
    info!("[PROXY] unsplash {:?} → {} photo(s)", req.query, photos.len());
    Ok(Json(SearchResponse { photos }))
}

async fn pixabay_proxy(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    validate(&req)?;
    let photos = pixabay_search(&state.http, &state.config, &req.query, req.per_page)
        .await
        .inspect_err(|e| warn!("[PROXY] pixabay {:?}: {}", req.query, e))?;
    info!("[PROXY] pixabay {:?} → {} photo(s)", req.query, photos.len());
    Ok(Json(SearchResponse { photos }))
}

async fn unsplash_track(
    State(state): State<AppState>,
    Json(req): Json<TrackRequest>,
) -> Result<axum::http::StatusCode, AppError> {
    if !is_unsplash_location(&state.config, &req.download_location) {
        return Err(AppError::BadRequest("download location is not an Unsplash API URL".into()));
    }
    unsplash_track_download(&state.http, &state.config, &req.download_location).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}
