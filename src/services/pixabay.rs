/// Pixabay API calls (proxy side, holds the API key)

use reqwest::Client;
use tracing::debug;

use crate::config::ImageryConfig;
use crate::error::ProviderError;
use crate::mappers::photo::pixabay_to_record;
use crate::types::image::ImageRecord;
use crate::types::pixabay::PixabaySearchResponse;

/// Pixabay rejects per_page outside 3..=200
const MIN_PER_PAGE: usize = 3;
const MAX_PER_PAGE: usize = 200;

pub async fn pixabay_search(
    http: &Client,
    config: &ImageryConfig,
    query: &str,
    per_page: usize,
) -> Result<Vec<ImageRecord>, ProviderError> {
    let key = config
        .pixabay_api_key
        .as_deref()
        .ok_or(ProviderError::NotConfigured("PIXABAY_API_KEY"))?;
    let query = query.trim();
    if query.is_empty() {
        return Err(ProviderError::InvalidQuery);
    }
    let wanted = per_page.clamp(1, MAX_PER_PAGE);
    let requested = wanted.max(MIN_PER_PAGE);

    let url = format!("{}/api/", config.pixabay_api_base);
    debug!("[PIXABAY] GET {} q={:?} per_page={}", url, query, requested);

    let per_page_param = requested.to_string();
    let response = http
        .get(&url)
        .query(&[
            ("key", key),
            ("q", query),
            ("per_page", per_page_param.as_str()),
            ("image_type", "photo"),
            ("orientation", "horizontal"),
            ("safesearch", "true"),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status.as_u16()));
    }

    let body: PixabaySearchResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::Malformed(e.without_url().to_string()))?;

    Ok(body
        .hits
        .iter()
        .filter_map(pixabay_to_record)
        .take(wanted)
        .collect())
}
