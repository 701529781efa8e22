/// Unsplash API types (only the fields the proxy reads)

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UnsplashSearchResponse {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UnsplashPhoto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub urls: UnsplashUrls,
    #[serde(default)]
    pub user: UnsplashUser,
    #[serde(default)]
    pub links: UnsplashPhotoLinks,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UnsplashUrls {
    #[serde(default)]
    pub raw: String,
    #[serde(default)]
    pub full: String,
    #[serde(default)]
    pub regular: String,
    #[serde(default)]
    pub small: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UnsplashUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub links: UnsplashUserLinks,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UnsplashUserLinks {
    #[serde(default)]
    pub html: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct UnsplashPhotoLinks {
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub download_location: String,
}
