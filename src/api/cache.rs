use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

/// Caching directive attached to a backend read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMode {
    /// Always fetch, never store.
    NoStore,
    /// Always fetch with `no-cache`; the body is not stored.
    NoCache,
    /// Serve the stored body when there is one.
    ForceCache,
}

impl CacheMode {
    /// Value sent as `Cache-Control` on the backend request, if any.
    pub fn directive(self) -> Option<&'static str> {
        match self {
            CacheMode::NoStore => Some("no-store"),
            CacheMode::NoCache => Some("no-cache"),
            CacheMode::ForceCache => None,
        }
    }
}

/// Successful force-cache GET bodies keyed by request path (`/slides?page=1`).
/// Bounded: once `capacity` keys are held, new keys are not stored.
#[derive(Clone)]
pub struct FetchCache {
    entries: Arc<Mutex<HashMap<String, Value>>>,
    capacity: usize,
}

impl Default for FetchCache {
    fn default() -> Self {
        Self::with_capacity(Self::MAX_ENTRIES)
    }
}

impl FetchCache {
    pub const MAX_ENTRIES: usize = 256;

    pub fn with_capacity(capacity: usize) -> Self {
        FetchCache {
            entries: Arc::new(Mutex::new(HashMap::new())),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        let map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned()
    }

    /// Store `body` under `key`. Existing keys are always refreshed; a new
    /// key is dropped when the cache is full. Returns whether it was stored.
    pub fn insert(&self, key: String, body: Value) -> bool {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if map.len() >= self.capacity && !map.contains_key(&key) {
            log::warn!("Fetch cache full ({} entries), not caching {key}", self.capacity);
            return false;
        }
        map.insert(key, body);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mark `route` stale: drops every entry for the route or anything below it.
    /// Returns how many entries were dropped.
    pub fn revalidate_path(&self, route: &str) -> usize {
        let mut map = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let before = map.len();
        map.retain(|key, _| !covers(route, key));
        let dropped = before - map.len();
        log::info!("Revalidated {route}: dropped {dropped} cached response(s)");
        dropped
    }
}

fn covers(route: &str, key: &str) -> bool {
    let path = key.split('?').next().unwrap_or(key);
    let route = route.trim_end_matches('/');
    path == route || path.starts_with(&format!("{route}/"))
}
