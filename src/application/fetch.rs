use crate::domain::error::SiteError;
use crate::infrastructure::storage::cache::{CacheStore, PersistentCache};
use serde_json::Value;
use std::future::Future;

/// Returns the payload cached under `key`, fetching and persisting it on a miss.
///
/// The store always receives the fetch function's raw result; callers parse
/// whatever comes back, cached or fresh. A failed fetch writes nothing, and a
/// failed save takes the new entry back out of the store.
pub async fn fetch_or_cache<F, Fut>(
    key: &str,
    fetch_fn: F,
    store: &mut CacheStore,
    cache: &PersistentCache,
) -> Result<String, SiteError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, SiteError>>,
{
    if let Some(cached) = store.get(key) {
        tracing::info!(key, "Using cache");
        return Ok(payload_text(cached));
    }

    tracing::info!(key, "Fetching");
    let body = fetch_fn().await?;

    store.insert(key.to_string(), Value::String(body.clone()));
    if let Err(e) = cache.save(store) {
        store.remove(key);
        return Err(e);
    }

    Ok(body)
}

/// Raw text of a cached value.
///
/// Strings are returned verbatim. Anything else is an API response an older
/// cache stored already decoded, so it is handed back as its JSON text.
fn payload_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
