//! In-memory TTL cache backing the injected cache interface.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use watchlist_core::ComputeCache;

const DEFAULT_TTL_SECS: i64 = 300; // 5 minutes

/// Cached value with its insertion timestamp.
struct CacheEntry<V> {
    data: V,
    cached_at: DateTime<Utc>,
}

/// `DashMap`-backed cache with a fixed TTL. Safe to share across tasks.
pub struct MemoryCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
    ttl_secs: i64,
}

impl<V: Clone + Send + Sync> MemoryCache<V> {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL_SECS)
    }

    pub fn with_ttl(ttl_secs: i64) -> Self {
        Self {
            entries: DashMap::new(),
            ttl_secs,
        }
    }
}

impl<V: Clone + Send + Sync> Default for MemoryCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Send + Sync> ComputeCache<V> for MemoryCache<V> {
    fn get(&self, key: &str) -> Option<V> {
        let entry = self.entries.get(key)?;
        if (Utc::now() - entry.cached_at).num_seconds() < self.ttl_secs {
            return Some(entry.data.clone());
        }
        // Expired; drop the read guard before removing to avoid deadlock.
        drop(entry);
        self.entries.remove(key);
        None
    }

    fn insert(&self, key: &str, value: V) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                data: value,
                cached_at: Utc::now(),
            },
        );
    }
}
