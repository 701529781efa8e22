/// Error types
/// ProviderError: transport-level failures of one image provider
/// AppError: HTTP-facing errors of the proxy and API routes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("query is empty")]
    InvalidQuery,

    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

/// The request URL is dropped: Pixabay carries its key in the query string
impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        ProviderError::Http(e.without_url())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(ProviderError::InvalidQuery) => StatusCode::BAD_REQUEST,
            AppError::Provider(ProviderError::NotConfigured(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Provider(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
