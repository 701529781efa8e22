/// Unsplash API calls (proxy side, holds the access key)

use reqwest::Client;
use tracing::debug;

use crate::config::ImageryConfig;
use crate::error::ProviderError;
use crate::mappers::photo::unsplash_to_record;
use crate::types::image::ImageRecord;
use crate::types::unsplash::UnsplashSearchResponse;

fn access_key(config: &ImageryConfig) -> Result<&str, ProviderError> {
    config
        .unsplash_access_key
        .as_deref()
        .ok_or(ProviderError::NotConfigured("UNSPLASH_ACCESS_KEY"))
}

/// Landscape photo search
pub async fn unsplash_search(
    http: &Client,
    config: &ImageryConfig,
    query: &str,
    per_page: usize,
) -> Result<Vec<ImageRecord>, ProviderError> {
    let key = access_key(config)?;
    let query = query.trim();
    if query.is_empty() {
        return Err(ProviderError::InvalidQuery);
    }
    let per_page = per_page.clamp(1, 30);

    let url = format!("{}/search/photos", config.unsplash_api_base);
    debug!("[UNSPLASH] GET {} query={:?} per_page={}", url, query, per_page);

    let per_page_param = per_page.to_string();
    let response = http
        .get(&url)
        .query(&[
            ("query", query),
            ("per_page", per_page_param.as_str()),
            ("orientation", "landscape"),
        ])
        .header("Authorization", format!("Client-ID {}", key))
        .header("Accept-Version", "v1")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status.as_u16()));
    }

    let body: UnsplashSearchResponse = response
        .json()
        .await
        .map_err(|e| ProviderError::Malformed(e.without_url().to_string()))?;

    Ok(body
        .results
        .iter()
        .filter_map(unsplash_to_record)
        .take(per_page)
        .collect())
}

/// Download event required by the Unsplash API terms whenever a photo is shown as a hero.
/// Callers must check `is_unsplash_location` first: the key is sent to `download_location`.
pub async fn unsplash_track_download(
    http: &Client,
    config: &ImageryConfig,
    download_location: &str,
) -> Result<(), ProviderError> {
    let key = access_key(config)?;

    let response = http
        .get(download_location)
        .header("Authorization", format!("Client-ID {}", key))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ProviderError::Status(response.status().as_u16()));
    }
    Ok(())
}

/// Only locations under the configured API host may receive the access key
pub fn is_unsplash_location(config: &ImageryConfig, download_location: &str) -> bool {
    download_location.starts_with(&format!("{}/", config.unsplash_api_base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_location_must_stay_on_api_host() {
        let config = ImageryConfig::default();
        assert!(is_unsplash_location(&config, "https://api.unsplash.com/photos/abc/download?ixid=1"));
        assert!(!is_unsplash_location(&config, "https://api.unsplash.com.evil.io/photos/abc"));
        assert!(!is_unsplash_location(&config, "https://example.com/"));
    }
}
