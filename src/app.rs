/// Router assembly

use axum::{http::StatusCode, response::IntoResponse, routing::any, Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(crate::routes::system::router())
        .merge(crate::routes::images::router())
        .merge(crate::routes::neighborhoods::router())
        .merge(crate::routes::weather::router())
        .merge(crate::proxy::search::router())
        .fallback(any(fallback))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn fallback(req: axum::extract::Request) -> impl IntoResponse {
    warn!("[HTTP] no route: {} {}", req.method(), req.uri().path());
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
