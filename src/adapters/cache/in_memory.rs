//! In-memory response cache.
//!
//! Process-wide store behind a `tokio` RwLock. Entries carry an absolute
//! expiry computed from their TTL and are dropped lazily on access. There
//! is no capacity bound and no single-flight coordination; write paths
//! keep the store small by invalidating what they touch.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::ports::ResponseCache;

/// One cached value with optional absolute expiry.
#[derive(Debug, Clone)]
struct Entry {
    value: JsonValue,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(deadline) if now >= deadline)
    }
}

/// In-memory implementation of [`ResponseCache`].
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked entries, expired or not. Test and introspection
    /// helper.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true when no entries are tracked.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl ResponseCache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<JsonValue> {
        let now = Instant::now();

        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        // expired: upgrade to a write lock and drop the entry
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(key) {
            if entry.is_expired(now) {
                entries.remove(key);
                tracing::debug!(key, "cache_expired");
            } else {
                // another writer refreshed the entry between locks
                return Some(entry.value.clone());
            }
        }
        None
    }

    async fn put(&self, key: &str, value: JsonValue, ttl: Option<Duration>) {
        let entry = Entry {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries.write().await.insert(key.to_string(), entry);
        tracing::debug!(key, "cache_stored");
    }

    async fn remove(&self, key: &str) {
        if self.entries.write().await.remove(key).is_some() {
            tracing::debug!(key, "cache_invalidated");
        }
    }

    async fn remove_prefix(&self, prefix: &str) {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(prefix, removed, "cache_prefix_invalidated");
        }
    }
}
