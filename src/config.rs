/// travel-imagery configuration
/// Environment variables with defaults; provider keys stay on the proxy side

use std::path::PathBuf;

/// Shared outbound timeout for every provider/proxy call
pub const DEFAULT_TIMEOUT_MS: u64 = 8000;

#[derive(Debug, Clone)]
pub struct ImageryConfig {
    /// Listen port
    pub port: u16,
    /// Listen address
    pub host: String,
    /// Base URL of the same-origin proxy the resolver searches through
    pub proxy_base: String,
    /// Timeout applied to all outbound HTTP calls
    pub timeout_ms: u64,
    pub unsplash_access_key: Option<String>,
    pub pixabay_api_key: Option<String>,
    pub unsplash_api_base: String,
    pub pixabay_api_base: String,
    /// Optional JSON file replacing the bundled fallback table
    pub fallback_file: Option<PathBuf>,
    /// Optional replacement for the built-in denylist
    pub denylist: Option<Vec<String>>,
    pub service_name: String,
}

impl ImageryConfig {
    pub fn from_env() -> Self {
        let port = std::env::var("IMAGERY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8787);

        Self {
            port,
            host: std::env::var("IMAGERY_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            proxy_base: std::env::var("IMAGERY_PROXY_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| format!("http://127.0.0.1:{}", port)),
            timeout_ms: std::env::var("IMAGERY_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_TIMEOUT_MS),
            unsplash_access_key: non_empty_var("UNSPLASH_ACCESS_KEY"),
            pixabay_api_key: non_empty_var("PIXABAY_API_KEY"),
            unsplash_api_base: std::env::var("UNSPLASH_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://api.unsplash.com".into()),
            pixabay_api_base: std::env::var("PIXABAY_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://pixabay.com".into()),
            fallback_file: non_empty_var("IMAGERY_FALLBACK_FILE").map(PathBuf::from),
            denylist: non_empty_var("IMAGERY_DENYLIST").map(|v| parse_list(&v)),
            service_name: std::env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "travel-imagery".into()),
        }
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ImageryConfig {
    fn default() -> Self {
        Self {
            port: 8787,
            host: "0.0.0.0".into(),
            proxy_base: "http://127.0.0.1:8787".into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            unsplash_access_key: None,
            pixabay_api_key: None,
            unsplash_api_base: "https://api.unsplash.com".into(),
            pixabay_api_base: "https://pixabay.com".into(),
            fallback_file: None,
            denylist: None,
            service_name: "travel-imagery".into(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
