/// Shared handler state

use reqwest::Client;
use std::sync::Arc;

use crate::config::ImageryConfig;
use crate::error::ProviderError;
use crate::services::resolver::ImageResolver;

#[derive(Clone)]
pub struct AppState {
    pub config: ImageryConfig,
    /// Outbound client for the proxy side (upstream provider APIs)
    pub http: Client,
    pub resolver: Arc<ImageResolver>,
}

impl AppState {
    pub fn from_config(config: ImageryConfig) -> Result<Self, ProviderError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        let resolver = ImageResolver::from_config(&config)?;
        Ok(Self {
            config,
            http,
            resolver: Arc::new(resolver),
        })
    }
}
