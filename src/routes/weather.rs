/// Hourly forecast window route

use axum::{routing::post, Json, Router};
use serde::Deserialize;

use crate::services::weather::{best_weather_window, HourlyForecast, WeatherWindow};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/weather/best-window", post(best_window))
}

#[derive(Debug, Deserialize)]
pub struct BestWindowRequest {
    #[serde(default)]
    pub hours: Vec<HourlyForecast>,
}

async fn best_window(Json(req): Json<BestWindowRequest>) -> Json<Option<WeatherWindow>> {
    Json(best_weather_window(&req.hours))
}
