/// Pixabay API types

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PixabaySearchResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(rename = "totalHits", default)]
    pub total_hits: i64,
    #[serde(default)]
    pub hits: Vec<PixabayHit>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PixabayHit {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "pageURL", default)]
    pub page_url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "webformatURL", default)]
    pub webformat_url: String,
    #[serde(rename = "largeImageURL", default)]
    pub large_image_url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub user_id: i64,
}
