//! Key-addressed query cache.
//!
//! Read operations go through [`QueryCache::fetch_as`]: a cache hit that is
//! still fresh returns without calling the fetcher; a stale or missing
//! entry runs the fetcher (with at most [`CacheConfig::retry`] automatic
//! retries) and stores the result. Concurrent fetches for the same key
//! share one in-flight future. Entries unused for longer than
//! [`CacheConfig::gc_time_ms`] are swept on access.
//!
//! Invalidation removes matching entries so the next read refetches; an
//! in-flight fetch that lands after an invalidation still writes its
//! response (last response wins — writes are never coalesced or queued).
//!
//! There is deliberately no refetch-on-focus and no cross-request
//! cancellation; a slow request only delays its own caller.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use api::ApiError;

use crate::clock::now_ms;
use crate::keys::{KeyFilter, QueryKey};

/// Staleness, retention and retry defaults for every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long a cached result is served without refetching.
    pub stale_time_ms: u64,
    /// How long an unused entry is retained before being dropped.
    pub gc_time_ms: u64,
    /// Automatic retries after a failed fetch.
    pub retry: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time_ms: 5 * 60 * 1000,
            gc_time_ms: 10 * 60 * 1000,
            retry: 1,
        }
    }
}

struct Entry {
    value: Value,
    fetched_at_ms: u64,
    last_used_ms: u64,
}

type InFlight = Shared<LocalBoxFuture<'static, Result<Value, ApiError>>>;

#[derive(Default)]
struct Inner {
    entries: HashMap<QueryKey, Entry>,
    in_flight: HashMap<QueryKey, InFlight>,
}

impl Inner {
    fn sweep(&mut self, now: u64, gc_time_ms: u64) {
        self.entries
            .retain(|_, entry| now.saturating_sub(entry.last_used_ms) <= gc_time_ms);
    }
}

/// Shared cache of query results, keyed by [`QueryKey`].
///
/// Clones share state; the whole application uses one instance.
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<Mutex<Inner>>,
    config: CacheConfig,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl QueryCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
            config,
        }
    }

    /// Fetch the JSON value for `key`, consulting the cache first.
    pub async fn fetch<F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<Value, ApiError>
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Value, ApiError>> + 'static,
    {
        let now = now_ms();
        let shared = {
            let mut inner = self.inner.lock().unwrap();
            inner.sweep(now, self.config.gc_time_ms);

            if let Some(entry) = inner.entries.get_mut(&key) {
                if now.saturating_sub(entry.fetched_at_ms) < self.config.stale_time_ms {
                    entry.last_used_ms = now;
                    return Ok(entry.value.clone());
                }
            }

            if let Some(in_flight) = inner.in_flight.get(&key) {
                in_flight.clone()
            } else {
                let retry = self.config.retry;
                let fut = async move {
                    let mut attempt = 0;
                    loop {
                        match fetcher().await {
                            Ok(value) => break Ok(value),
                            Err(err) if attempt < retry => {
                                tracing::debug!("query fetch retrying after error: {err}");
                                attempt += 1;
                            }
                            Err(err) => break Err(err),
                        }
                    }
                }
                .boxed_local()
                .shared();
                inner.in_flight.insert(key.clone(), fut.clone());
                fut
            }
        };

        let result = shared.await;

        let mut inner = self.inner.lock().unwrap();
        inner.in_flight.remove(&key);
        if let Ok(value) = &result {
            let now = now_ms();
            inner.entries.insert(
                key,
                Entry {
                    value: value.clone(),
                    fetched_at_ms: now,
                    last_used_ms: now,
                },
            );
        }
        result
    }

    /// Typed wrapper over [`fetch`](Self::fetch): the fetcher returns the
    /// resource type, the cache stores JSON.
    pub async fn fetch_as<T, F, Fut>(&self, key: QueryKey, fetcher: F) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned + 'static,
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let value = self
            .fetch(key, move || {
                let fut = fetcher();
                async move {
                    let value = fut.await?;
                    serde_json::to_value(value).map_err(|err| ApiError::Decode(err.to_string()))
                }
            })
            .await?;
        serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Drop every entry the filter matches; subsequent reads refetch.
    pub fn invalidate(&self, filter: &KeyFilter) {
        let mut inner = self.inner.lock().unwrap();
        inner.entries.retain(|key, _| !filter.matches(key));
        inner.in_flight.retain(|key, _| !filter.matches(key));
    }

    /// Whether a (possibly stale) entry exists for `key`.
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.inner.lock().unwrap().entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn counting_fetcher(
        counter: Arc<AtomicU32>,
        value: Value,
    ) -> impl Fn() -> LocalBoxFuture<'static, Result<Value, ApiError>> {
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            let value = value.clone();
            async move { Ok(value) }.boxed_local()
        }
    }

    #[tokio::test]
    async fn test_fresh_hit_skips_fetcher() {
        let cache = QueryCache::default();
        let calls = Arc::new(AtomicU32::new(0));

        let first = cache
            .fetch(QueryKey::Goals, counting_fetcher(calls.clone(), json!([1])))
            .await
            .unwrap();
        let second = cache
            .fetch(QueryKey::Goals, counting_fetcher(calls.clone(), json!([2])))
            .await
            .unwrap();

        assert_eq!(first, json!([1]));
        assert_eq!(second, json!([1]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_entry_refetches() {
        let cache = QueryCache::new(CacheConfig {
            stale_time_ms: 0,
            ..CacheConfig::default()
        });
        let calls = Arc::new(AtomicU32::new(0));

        cache
            .fetch(QueryKey::Goals, counting_fetcher(calls.clone(), json!([1])))
            .await
            .unwrap();
        let second = cache
            .fetch(QueryKey::Goals, counting_fetcher(calls.clone(), json!([2])))
            .await
            .unwrap();

        assert_eq!(second, json!([2]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unused_entries_are_swept() {
        let cache = QueryCache::new(CacheConfig {
            gc_time_ms: 0,
            ..CacheConfig::default()
        });
        let calls = Arc::new(AtomicU32::new(0));

        cache
            .fetch(QueryKey::Circles, counting_fetcher(calls.clone(), json!([])))
            .await
            .unwrap();
        assert!(cache.contains(&QueryKey::Circles));

        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        // The sweep runs on the next access
        cache
            .fetch(QueryKey::Goals, counting_fetcher(calls.clone(), json!([])))
            .await
            .unwrap();
        assert!(!cache.contains(&QueryKey::Circles));
    }

    #[tokio::test]
    async fn test_concurrent_fetches_share_one_flight() {
        let cache = QueryCache::default();
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let fetcher = move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                Ok(json!("shared"))
            }
        };

        let (a, b) = futures::join!(
            cache.fetch(QueryKey::Buddies, fetcher.clone()),
            cache.fetch(QueryKey::Buddies, fetcher)
        );

        assert_eq!(a.unwrap(), json!("shared"));
        assert_eq!(b.unwrap(), json!("shared"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_retries_once_then_errors() {
        let cache = QueryCache::default();
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let fetcher = move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async move {
                Err::<Value, _>(ApiError::Network("connection refused".to_string()))
            }
        };

        let result = cache.fetch(QueryKey::Goals, fetcher).await;
        assert!(result.is_err());
        // original attempt + exactly one retry
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(!cache.contains(&QueryKey::Goals));
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let cache = QueryCache::default();
        let calls = Arc::new(AtomicU32::new(0));

        cache
            .fetch(QueryKey::Goals, counting_fetcher(calls.clone(), json!([1])))
            .await
            .unwrap();
        cache.invalidate(&KeyFilter::Exact(QueryKey::Goals));
        assert!(!cache.contains(&QueryKey::Goals));

        let refetched = cache
            .fetch(QueryKey::Goals, counting_fetcher(calls.clone(), json!([2])))
            .await
            .unwrap();
        assert_eq!(refetched, json!([2]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_as_round_trips_types() {
        let cache = QueryCache::default();
        let names: Vec<String> = cache
            .fetch_as(QueryKey::UserSearch("al".to_string()), || async {
                Ok(vec!["alice".to_string(), "alan".to_string()])
            })
            .await
            .unwrap();
        assert_eq!(names, vec!["alice", "alan"]);
    }
}
