use crate::domain::error::SiteError;
use async_trait::async_trait;

/// Source of raw page and API payloads.
///
/// The production implementation is `HttpFetcher`; tests substitute
/// in-memory fakes so the cache and parsing layers run without a network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` and return the response body as text.
    ///
    /// Non-success statuses are errors; the body is not inspected.
    async fn fetch(&self, url: &str) -> Result<String, SiteError>;
}
