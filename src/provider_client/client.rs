/// Proxy-backed provider client
/// Talks to the same-origin proxy, never to the provider itself, so it holds no credentials

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::ImageProvider;
use crate::config::{ImageryConfig, DEFAULT_TIMEOUT_MS};
use crate::error::ProviderError;
use crate::mappers::photo::{PIXABAY_HOMEPAGE, UNSPLASH_HOMEPAGE};
use crate::types::image::{ImageRecord, SearchRequest, SearchResponse, TrackRequest};

#[derive(Debug, Clone)]
pub struct ProxyClientOptions {
    pub timeout_ms: u64,
    /// Used when a record arrives without a profile link
    pub homepage: String,
    /// Whether this provider wants download notifications
    pub tracks_downloads: bool,
}

impl Default for ProxyClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            homepage: String::new(),
            tracks_downloads: false,
        }
    }
}

#[derive(Clone)]
pub struct ProxySearchClient {
    name: String,
    proxy_base: String,
    options: ProxyClientOptions,
    http: Client,
}

impl ProxySearchClient {
    pub fn new(name: &str, proxy_base: &str, options: ProxyClientOptions) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_millis(options.timeout_ms))
            .build()?;

        Ok(Self {
            name: name.to_string(),
            proxy_base: proxy_base.trim_end_matches('/').to_string(),
            options,
            http,
        })
    }

    pub fn unsplash(config: &ImageryConfig) -> Result<Self, ProviderError> {
        Self::new(
            "unsplash",
            &config.proxy_base,
            ProxyClientOptions {
                timeout_ms: config.timeout_ms,
                homepage: UNSPLASH_HOMEPAGE.into(),
                tracks_downloads: true,
            },
        )
    }

    pub fn pixabay(config: &ImageryConfig) -> Result<Self, ProviderError> {
        Self::new(
            "pixabay",
            &config.proxy_base,
            ProxyClientOptions {
                timeout_ms: config.timeout_ms,
                homepage: PIXABAY_HOMEPAGE.into(),
                tracks_downloads: false,
            },
        )
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/api/proxy/{}/{}", self.proxy_base, self.name, action)
    }
}

#[async_trait]
impl ImageProvider for ProxySearchClient {
    fn name(&self) -> &str {
        &self.name
    }

    async fn search(&self, query: &str, count: usize) -> Result<Vec<ImageRecord>, ProviderError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ProviderError::InvalidQuery);
        }
        let count = count.max(1);

        let url = self.endpoint("search");
        debug!("[PROVIDER] {} POST {} query={:?} per_page={}", self.name, url, query, count);

        let response = self
            .http
            .post(&url)
            .json(&SearchRequest {
                query: query.to_string(),
                per_page: count,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            ProviderError::Malformed(format!("{} body={}", e, preview))
        })?;

        let photos = parsed
            .photos
            .into_iter()
            .filter(|p| !p.url.trim().is_empty())
            .take(count)
            .map(|mut p| {
                if p.profile_url.is_empty() {
                    p.profile_url = self.options.homepage.clone();
                }
                if p.photographer.trim().is_empty() {
                    p.photographer = "Unknown".into();
                }
                if p.provider.is_none() {
                    p.provider = Some(self.name.clone());
                }
                p
            })
            .collect();

        Ok(photos)
    }

    async fn track_download(&self, record: &ImageRecord) -> Result<(), ProviderError> {
        if !self.options.tracks_downloads {
            return Ok(());
        }
        let Some(location) = record.download_location.as_deref() else {
            return Ok(());
        };

        let response = self
            .http
            .post(self.endpoint("track"))
            .json(&TrackRequest {
                download_location: location.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
