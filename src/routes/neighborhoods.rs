/// Neighborhood categorization route

use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::services::neighborhood::{categorize_neighborhood, NeighborhoodCategory};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/neighborhoods/categorize", post(categorize))
}

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub category: NeighborhoodCategory,
}

async fn categorize(Json(req): Json<CategorizeRequest>) -> Json<CategorizeResponse> {
    Json(CategorizeResponse {
        category: categorize_neighborhood(&req.name, req.description.as_deref()),
    })
}
