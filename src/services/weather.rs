/// Best two-hour weather window
/// Linear scan over adjacent hourly forecasts; each hour is scored, a window is the mean of its pair

use serde::{Deserialize, Serialize};

/// Temperature that scores best, in °C
const IDEAL_TEMPERATURE_C: f64 = 22.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyForecast {
    /// ISO-8601 start of the hour, passed through untouched
    pub time: String,
    pub temperature_c: f64,
    /// 0..=100
    #[serde(default)]
    pub precipitation_probability: f64,
    #[serde(default)]
    pub wind_kph: f64,
    /// 0..=100
    #[serde(default)]
    pub cloud_cover: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherWindow {
    pub start: String,
    pub end: String,
    pub start_index: usize,
    pub score: f64,
}

pub fn hour_score(hour: &HourlyForecast) -> f64 {
    100.0
        - 0.6 * hour.precipitation_probability.clamp(0.0, 100.0)
        - 2.0 * (hour.temperature_c - IDEAL_TEMPERATURE_C).abs()
        - 0.5 * hour.wind_kph.max(0.0)
        - 0.1 * hour.cloud_cover.clamp(0.0, 100.0)
}

/// Earliest window wins ties; fewer than two hours → None
pub fn best_weather_window(hours: &[HourlyForecast]) -> Option<WeatherWindow> {
    let mut best: Option<WeatherWindow> = None;

    for (i, pair) in hours.windows(2).enumerate() {
        let score = (hour_score(&pair[0]) + hour_score(&pair[1])) / 2.0;
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(WeatherWindow {
                start: pair[0].time.clone(),
                end: pair[1].time.clone(),
                start_index: i,
                score,
            });
        }
    }
    best
}
