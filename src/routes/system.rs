/// Health + service info routes

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/system/info", get(system_info))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn system_info(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "name": state.config.service_name,
        "version": env!("CARGO_PKG_VERSION"),
        "cachedResults": state.resolver.cache().len(),
        "providers": {
            "unsplash": state.config.unsplash_access_key.is_some(),
            "pixabay": state.config.pixabay_api_key.is_some(),
        },
    }))
}
