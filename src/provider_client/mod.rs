pub mod client;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::image::ImageRecord;

/// One image-search backend
/// Transport only: no retries, no fallback. An empty Vec is "no results", not an error.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn search(&self, query: &str, count: usize) -> Result<Vec<ImageRecord>, ProviderError>;

    /// Usage notification for providers whose terms require it
    async fn track_download(&self, _record: &ImageRecord) -> Result<(), ProviderError> {
        Ok(())
    }
}
