//! Time-to-live cache for upstream snapshots.
//!
//! Entries are checked lazily on access with [`is_expired`]; there is no background
//! sweep. Time comes from a [`Clock`] so expiry can be driven deterministically.

use async_lock::RwLock;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ─── CacheKey ────────────────────────────────────────────────────────────────

/// Cache key derived from an operation name and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for a coin listing of `limit` entries (`"cryptocurrencies:<limit>"`).
    pub fn cryptocurrencies(limit: u32) -> Self {
        Self(format!("cryptocurrencies:{}", limit))
    }

    /// Key for the global market statistics.
    pub fn market_stats() -> Self {
        Self("market-stats".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── CacheEntry ──────────────────────────────────────────────────────────────

/// A cached value with the time it was fetched and how long it stays fresh.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub fetched_at_epoch_millis: i64,
    pub ttl_millis: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, fetched_at_epoch_millis: i64, ttl: Duration) -> Self {
        Self {
            value,
            fetched_at_epoch_millis,
            ttl_millis: i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX),
        }
    }
}

/// `true` once `ttl_millis` have elapsed since the entry was fetched.
pub fn is_expired<T>(entry: &CacheEntry<T>, now_epoch_millis: i64) -> bool {
    now_epoch_millis.saturating_sub(entry.fetched_at_epoch_millis) >= entry.ttl_millis
}

// ─── Clock ───────────────────────────────────────────────────────────────────

/// Source of wall-clock time in epoch milliseconds.
pub trait Clock: Send + Sync + std::fmt::Debug {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to. Useful for exercising expiry in tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_epoch_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(start_epoch_millis),
        }
    }

    pub fn advance(&self, by: Duration) {
        let by = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.now.fetch_add(by, Ordering::SeqCst);
    }

    pub fn set(&self, epoch_millis: i64) {
        self.now.store(epoch_millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

// ─── TtlCache ────────────────────────────────────────────────────────────────

/// Shared key → entry map. Clones share the same underlying map.
#[derive(Debug)]
pub struct TtlCache<T> {
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry<T>>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Return the cached value if still fresh. An expired entry is evicted.
    pub async fn get(&self, key: &CacheKey, now_epoch_millis: i64) -> Option<T> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !is_expired(entry, now_epoch_millis) => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        let mut entries = self.entries.write().await;
        // Another task may have refreshed the entry between the two locks.
        if entries
            .get(key)
            .is_some_and(|entry| is_expired(entry, now_epoch_millis))
        {
            entries.remove(key);
            tracing::debug!(key = %key, "Evicted expired cache entry");
        }
        None
    }

    /// Store `value` under `key`, replacing any previous entry.
    pub async fn insert(&self, key: CacheKey, value: T, now_epoch_millis: i64, ttl: Duration) {
        self.entries
            .write()
            .await
            .insert(key, CacheEntry::new(value, now_epoch_millis, ttl));
    }

    pub async fn remove(&self, key: &CacheKey) {
        self.entries.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TtlCache<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}
