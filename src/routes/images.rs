/// Image resolution routes
/// Always answer with an image; failures degrade to the fallback table inside the resolver

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::error::AppError;
use crate::services::resolver::DEFAULT_VENUE_COUNT;
use crate::state::AppState;
use crate::types::image::{HeroUrl, ImageQuery, ImageRecord};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/images/hero", get(hero))
        .route("/api/images/hero/meta", get(hero_meta))
        .route("/api/images/venue", get(venue))
}

fn intent(query: &ImageQuery) -> Option<&str> {
    query.intent.as_deref().map(str::trim).filter(|i| !i.is_empty())
}

async fn hero(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Json<HeroUrl> {
    let url = state.resolver.resolve_hero_image(&query.place, intent(&query)).await;
    Json(HeroUrl { url })
}

async fn hero_meta(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Json<ImageRecord> {
    Json(
        state
            .resolver
            .resolve_hero_image_with_meta(&query.place, intent(&query))
            .await,
    )
}

async fn venue(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Result<Json<Vec<ImageRecord>>, AppError> {
    let count = query.count.unwrap_or(DEFAULT_VENUE_COUNT);
    if count == 0 {
        return Err(AppError::BadRequest("count must be at least 1".into()));
    }
    Ok(Json(
        state
            .resolver
            .resolve_venue_images(&query.place, intent(&query), count)
            .await,
    ))
}
