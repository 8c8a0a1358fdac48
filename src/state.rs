use crate::application::fetch::fetch_or_cache;
use crate::domain::error::SiteError;
use crate::domain::model::{RegionDirectory, SiteEntity};
use crate::domain::traits::Fetcher;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::{create_client, HttpFetcher};
use crate::infrastructure::storage::cache::{CacheStore, PersistentCache};
use std::sync::Arc;

/// Everything one session works with, passed explicitly to each operation.
pub struct AppState {
    pub config: Config,
    pub cache: PersistentCache,
    pub store: CacheStore,
    pub fetcher: Arc<dyn Fetcher>,
    /// Derived from the home page on first use, then reused.
    pub directory: Option<RegionDirectory>,
    /// Sites of the most recently listed state.
    pub current_sites: Vec<SiteEntity>,
}

impl AppState {
    pub fn new(config: Config, cache: PersistentCache) -> Result<Self, SiteError> {
        let fetcher = HttpFetcher::new(create_client()?);
        Ok(Self::with_fetcher(config, cache, Arc::new(fetcher)))
    }

    /// Builds a session over any fetcher, loading the cache store once.
    pub fn with_fetcher(config: Config, cache: PersistentCache, fetcher: Arc<dyn Fetcher>) -> Self {
        let store = cache.load();
        tracing::debug!(
            "Loaded {} cache entries from {}",
            store.len(),
            cache.path().display()
        );

        Self {
            config,
            cache,
            store,
            fetcher,
            directory: None,
            current_sites: Vec::new(),
        }
    }

    /// `fetch_or_cache` with this session's fetcher, store and cache file.
    pub async fn fetch_cached(&mut self, key: &str) -> Result<String, SiteError> {
        self.fetch_cached_with(key, |_| Ok(())).await
    }

    /// Like `fetch_cached`, but a fresh body must pass `validate` before it
    /// is stored. A rejected body is returned as the validation error and
    /// never cached.
    pub async fn fetch_cached_with<V>(&mut self, key: &str, validate: V) -> Result<String, SiteError>
    where
        V: FnOnce(&str) -> Result<(), SiteError>,
    {
        let fetcher = Arc::clone(&self.fetcher);
        let fetch = || async move {
            let body = fetcher.fetch(key).await?;
            validate(&body)?;
            Ok::<_, SiteError>(body)
        };
        fetch_or_cache(key, fetch, &mut self.store, &self.cache).await
    }
}
