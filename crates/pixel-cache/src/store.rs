//! The keyed store with a staleness window.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::{CacheError, QueryKey};

struct Entry<T> {
    value: T,
    stored_at: Instant,
}

/// In-memory cache from [`QueryKey`] to a fetched response.
///
/// Reads older than the staleness window miss; writes overwrite
/// unconditionally. Values are cloned out so callers get an immutable
/// snapshot and never observe in-place mutation of a cached result set.
pub struct ResponseCache<T> {
    entries: Mutex<HashMap<QueryKey, Entry<T>>>,
    ttl: Duration,
}

impl<T: Clone> ResponseCache<T> {
    /// Create a cache whose entries stay fresh for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Get a fresh value for a key. A stale or absent entry returns `None`.
    pub fn get(&self, key: &QueryKey) -> Result<Option<T>, CacheError> {
        let entries = self.lock()?;
        Ok(entries
            .get(key)
            .filter(|entry| entry.stored_at.elapsed() <= self.ttl)
            .map(|entry| entry.value.clone()))
    }

    /// Store a value, overwriting any previous entry for the key.
    pub fn insert(&self, key: QueryKey, value: T) -> Result<(), CacheError> {
        let mut entries = self.lock()?;
        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
        Ok(())
    }

    /// Drop every stale entry. Optional housekeeping; nothing relies on it.
    pub fn purge_expired(&self) -> Result<usize, CacheError> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|_, entry| entry.stored_at.elapsed() <= self.ttl);
        Ok(before - entries.len())
    }

    /// Number of entries, fresh or stale.
    pub fn len(&self) -> Result<usize, CacheError> {
        Ok(self.lock()?.len())
    }

    /// Check if the cache holds no entries.
    pub fn is_empty(&self) -> Result<bool, CacheError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<QueryKey, Entry<T>>>, CacheError> {
        self.entries
            .lock()
            .map_err(|e| CacheError::Poisoned(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let cache: ResponseCache<u32> = ResponseCache::new(Duration::from_secs(60));
        let key = QueryKey::new("ps5", "relevance");

        assert_eq!(cache.get(&key).unwrap(), None);
        cache.insert(key.clone(), 7).unwrap();
        assert_eq!(cache.get(&key).unwrap(), Some(7));
    }

    #[test]
    fn test_overwrite_on_write() {
        let cache: ResponseCache<u32> = ResponseCache::new(Duration::from_secs(60));
        let key = QueryKey::new("ps5", "relevance");

        cache.insert(key.clone(), 1).unwrap();
        cache.insert(key.clone(), 2).unwrap();
        assert_eq!(cache.get(&key).unwrap(), Some(2));
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn test_stale_entry_misses() {
        let cache: ResponseCache<u32> = ResponseCache::new(Duration::from_millis(10));
        let key = QueryKey::new("ps5", "relevance");

        cache.insert(key.clone(), 7).unwrap();
        std::thread::sleep(Duration::from_millis(25));
        assert_eq!(cache.get(&key).unwrap(), None);
        // Entry is still resident until purged.
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn test_purge_expired() {
        let cache: ResponseCache<u32> = ResponseCache::new(Duration::from_millis(10));
        cache.insert(QueryKey::new("a", "relevance"), 1).unwrap();
        cache.insert(QueryKey::new("b", "relevance"), 2).unwrap();
        std::thread::sleep(Duration::from_millis(25));
        cache.insert(QueryKey::new("c", "relevance"), 3).unwrap();

        assert_eq!(cache.purge_expired().unwrap(), 2);
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn test_keys_are_independent() {
        let cache: ResponseCache<&'static str> = ResponseCache::new(Duration::from_secs(60));
        cache.insert(QueryKey::new("ps5", "relevance"), "five").unwrap();
        cache.insert(QueryKey::new("ps4", "relevance"), "four").unwrap();

        assert_eq!(
            cache.get(&QueryKey::new("ps5", "relevance")).unwrap(),
            Some("five")
        );
        assert_eq!(
            cache.get(&QueryKey::new("ps4", "relevance")).unwrap(),
            Some("four")
        );
    }
}
