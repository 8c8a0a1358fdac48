// On-disk page cache: one JSON object, key -> payload
use crate::domain::error::SiteError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fetch key -> cached payload.
///
/// New entries are always the raw response body as a JSON string. Older
/// cache files may hold decoded JSON objects; those are kept as-is.
pub type CacheStore = BTreeMap<String, Value>;

/// A cache store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct PersistentCache {
    path: PathBuf,
}

impl PersistentCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the backing file, falling back to an empty store.
    ///
    /// A missing file is the normal first-run case. An unreadable or
    /// undecodable file is logged and otherwise ignored: the cache only ever
    /// holds data that can be fetched again.
    pub fn load(&self) -> CacheStore {
        match self.try_load() {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("Ignoring cache file {}: {}", self.path.display(), e);
                CacheStore::new()
            }
        }
    }

    fn try_load(&self) -> Result<CacheStore, SiteError> {
        if !self.path.exists() {
            return Ok(CacheStore::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| SiteError::CacheLoad(e.to_string()))?;
        serde_json::from_str::<CacheStore>(&content).map_err(|e| SiteError::CacheLoad(e.to_string()))
    }

    /// Replaces the backing file with the full contents of `store`.
    ///
    /// The JSON is written to a sibling temp file and renamed into place, so
    /// readers never observe a partially written cache.
    pub fn save(&self, store: &CacheStore) -> Result<(), SiteError> {
        let json = serde_json::to_string(store)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json).map_err(|e| self.write_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            self.write_error(e)
        })?;

        tracing::debug!("Saved {} cache entries to {}", store.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "cache.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> SiteError {
        SiteError::CacheWrite {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_cache() -> (PersistentCache, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let cache = PersistentCache::new(temp_dir.path().join("cache.json"));
        (cache, temp_dir)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (cache, _temp_dir) = create_test_cache();
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let (cache, _temp_dir) = create_test_cache();
        fs::write(cache.path(), "{not json").unwrap();
        assert!(cache.load().is_empty());

        // valid JSON, but not an object
        fs::write(cache.path(), "[1, 2, 3]").unwrap();
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let (cache, _temp_dir) = create_test_cache();
        let mut store = CacheStore::new();
        store.insert(
            "https://www.nps.gov/isro/index.htm".to_string(),
            Value::String("<html><body>Isle Royale</body></html>".to_string()),
        );
        store.insert(
            "http://www.mapquestapi.com/search/v2/radius?origin=49931".to_string(),
            json!({"searchResults": [{"name": "Cafe"}]}),
        );

        cache.save(&store).expect("Save should succeed");
        let loaded = cache.load();

        assert_eq!(loaded, store);
    }

    #[test]
    fn test_save_overwrites_in_full() {
        let (cache, _temp_dir) = create_test_cache();
        let mut store = CacheStore::new();
        store.insert("a".to_string(), Value::String("first".to_string()));
        cache.save(&store).unwrap();

        let mut replacement = CacheStore::new();
        replacement.insert("b".to_string(), Value::String("second".to_string()));
        cache.save(&replacement).unwrap();

        let loaded = cache.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("b"), Some(&Value::String("second".to_string())));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (cache, temp_dir) = create_test_cache();
        cache.save(&CacheStore::new()).unwrap();

        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["cache.json".to_string()]);
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("dir").join("cache.json");
        let cache = PersistentCache::new(&nested);

        cache.save(&CacheStore::new()).expect("Save should succeed");
        assert!(nested.exists());
    }

    #[test]
    fn test_save_failure_is_cache_write_error() {
        let temp_dir = TempDir::new().unwrap();
        // the backing "file" is an existing directory, so the rename fails
        let cache = PersistentCache::new(temp_dir.path());
        let err = cache.save(&CacheStore::new()).unwrap_err();
        assert!(matches!(err, SiteError::CacheWrite { .. }));
    }
}
