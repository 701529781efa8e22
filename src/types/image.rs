/// Image resolution types shared by the resolver, the proxy client and the proxy

use serde::{Deserialize, Serialize};

/// One resolved photo plus attribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub url: String,
    #[serde(default = "unknown_photographer")]
    pub photographer: String,
    #[serde(default)]
    pub profile_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provider that produced the record, if it came from a live search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Usage-tracking endpoint required by some providers' terms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_location: Option<String>,
}

fn unknown_photographer() -> String {
    "Unknown".into()
}

impl ImageRecord {
    /// Record for a bundled URL with placeholder attribution
    pub fn fallback(url: &str, photographer: &str, profile_url: &str) -> Self {
        Self {
            url: url.to_string(),
            photographer: photographer.to_string(),
            profile_url: profile_url.to_string(),
            description: None,
            provider: None,
            download_location: None,
        }
    }
}

/// A single resolution request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageQuery {
    pub place: String,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
}

/// Body sent to a proxy search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub per_page: usize,
}

/// Body returned by a proxy search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub photos: Vec<ImageRecord>,
}

/// Body sent to a proxy download-tracking endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub download_location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroUrl {
    pub url: String,
}
