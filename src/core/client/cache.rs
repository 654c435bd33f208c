use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Defines the behavior of the in-memory cache for an API call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise, fetch from the network
    /// and write the response to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

impl CacheMode {
    pub(crate) fn reads(self) -> bool {
        self == Self::Use
    }

    pub(crate) fn writes(self) -> bool {
        self != Self::Bypass
    }
}

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

/// URL-keyed response bodies with per-entry expiry.
#[derive(Debug)]
pub(crate) struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

impl CacheStore {
    pub(crate) fn new(default_ttl: Duration) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    pub(crate) async fn get(&self, key: &str) -> Option<String> {
        let guard = self.map.read().await;
        guard
            .get(key)
            .filter(|entry| Instant::now() <= entry.expires_at)
            .map(|entry| entry.body.clone())
    }

    pub(crate) async fn put(&self, key: &str, body: &str, ttl_override: Option<Duration>) {
        let ttl = ttl_override.unwrap_or(self.default_ttl);
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + ttl,
        };
        let mut guard = self.map.write().await;
        // drop whatever has gone stale while we hold the lock anyway
        let now = Instant::now();
        guard.retain(|_, e| e.expires_at >= now);
        guard.insert(key.to_string(), entry);
    }
}
