/// Resolution result cache
/// Keyed by (query sent to providers, requested count); lives for the session, never evicts.
/// `None` records a confirmed total miss so failing lookups are not repeated.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::types::image::ImageRecord;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub count: usize,
}

impl CacheKey {
    pub fn new(query: &str, count: usize) -> Self {
        Self {
            query: query.to_string(),
            count,
        }
    }
}

pub type CachedResult = Option<Vec<ImageRecord>>;

#[derive(Debug, Default)]
pub struct ResultCache {
    entries: DashMap<CacheKey, CachedResult>,
    locks: DashMap<CacheKey, Arc<Mutex<()>>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outer `None` = not cached; inner `None` = cached total miss
    pub fn get(&self, key: &CacheKey) -> Option<CachedResult> {
        let hit = self.entries.get(key).map(|v| v.value().clone());
        if hit.is_some() {
            debug!("[CACHE] hit: query={:?}, count={}", key.query, key.count);
        }
        hit
    }

    pub fn set(&self, key: CacheKey, value: CachedResult) {
        self.entries.insert(key, value);
    }

    /// Per-key lock so concurrent identical resolutions hit the network once
    pub fn lock_for(&self, key: &CacheKey) -> Arc<Mutex<()>> {
        self.locks
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
