//! Response cache port.
//!
//! A process-wide key/value store of computed results with per-key TTL and
//! explicit invalidation by exact key or prefix. Values are stored as JSON
//! so one store serves every report type. Concurrent callers missing the
//! same key may both compute it — compute functions are idempotent pure
//! reads, so the duplicate work is tolerated rather than coordinated.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::future::Future;
use std::time::Duration;

use crate::domain::foundation::DomainError;

/// Cache port for computed read-path results.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Returns the unexpired value under `key`, if any.
    async fn get(&self, key: &str) -> Option<JsonValue>;

    /// Stores `value` under `key`. `ttl` of `None` means no expiry; the
    /// entry lives until invalidated.
    async fn put(&self, key: &str, value: JsonValue, ttl: Option<Duration>);

    /// Evicts one entry.
    async fn remove(&self, key: &str);

    /// Evicts every currently-tracked key starting with `prefix`.
    async fn remove_prefix(&self, prefix: &str);
}

/// Returns the cached value under `key`, or invokes `compute`, stores the
/// result with `ttl`, and returns it.
///
/// A failing `compute` propagates its error and leaves the cache
/// unpopulated for `key`. An unreadable cached value (shape drift across
/// releases) is dropped and recomputed.
pub async fn get_or_compute<T, F, Fut>(
    cache: &dyn ResponseCache,
    key: &str,
    ttl: Option<Duration>,
    compute: F,
) -> Result<T, DomainError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, DomainError>>,
{
    if let Some(value) = cache.get(key).await {
        match serde_json::from_value(value) {
            Ok(cached) => {
                tracing::debug!(key, "cache_hit");
                return Ok(cached);
            }
            Err(error) => {
                tracing::debug!(key, %error, "cache_decode_failed");
                cache.remove(key).await;
            }
        }
    }

    tracing::debug!(key, "cache_miss");
    let computed = compute().await?;

    match serde_json::to_value(&computed) {
        Ok(value) => cache.put(key, value, ttl).await,
        Err(error) => tracing::debug!(key, %error, "cache_encode_failed"),
    }

    Ok(computed)
}
