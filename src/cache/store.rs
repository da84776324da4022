//! In-memory response store with time-based expiry
//!
//! Provides a `Cache` that maps request URLs to raw response bodies. Entries are
//! stamped when inserted and removed by a background reaper once they are at least
//! one interval old. Reads never check age: an entry that has expired but has not
//! been swept yet is still a hit.

use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use super::reaper;

/// Errors that can occur when constructing a cache
#[derive(Debug, Error)]
pub enum CacheError {
    /// The interval must be positive and small enough to schedule a sweep
    #[error("Cache interval must be positive and finite, got {0:?}")]
    InvalidInterval(Duration),

    /// The reaper needs a Tokio runtime to run on
    #[error("Cache must be created inside a Tokio runtime")]
    NoRuntime,
}

/// A single cached response body
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// When the entry was inserted
    pub(crate) created_at: Instant,
    /// The raw response body
    pub(crate) value: Bytes,
}

/// Map shared between a cache handle and its reaper
pub(crate) type SharedEntries = Arc<Mutex<HashMap<String, CacheEntry>>>;

/// Thread-safe key/value store whose entries expire after a fixed interval
///
/// The interval is both the maximum age of an entry and the period between
/// sweeps, so an entry is gone at most two intervals after it was added.
/// Dropping the cache (or calling [`Cache::shutdown`]) stops the reaper.
#[derive(Debug)]
pub struct Cache {
    entries: SharedEntries,
    interval: Duration,
    shutdown: CancellationToken,
    reaper: Option<JoinHandle<()>>,
}

impl Cache {
    /// Creates a new cache and starts its reaper on the current Tokio runtime
    ///
    /// # Arguments
    /// * `interval` - Maximum entry age and sweep period
    ///
    /// # Returns
    /// * `Ok(Cache)` with a running reaper
    /// * `Err(CacheError::InvalidInterval)` if `interval` is zero or too large
    ///   for the clock to schedule the first sweep
    /// * `Err(CacheError::NoRuntime)` if called outside a Tokio runtime
    pub fn new(interval: Duration) -> Result<Self, CacheError> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        let first_sweep = Instant::now()
            .checked_add(interval)
            .ok_or(CacheError::InvalidInterval(interval))?;

        let entries: SharedEntries = Arc::new(Mutex::new(HashMap::new()));
        let shutdown = CancellationToken::new();

        let reaper = runtime.spawn(reaper::run(
            Arc::clone(&entries),
            interval,
            first_sweep,
            shutdown.clone(),
        ));

        tracing::debug!(interval_ms = interval.as_millis() as u64, "cache created");

        Ok(Self {
            entries,
            interval,
            shutdown,
            reaper: Some(reaper),
        })
    }

    /// Inserts or replaces the entry for `key`, stamped with the current time
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let entry = CacheEntry {
            created_at: Instant::now(),
            value: value.into(),
        };
        self.entries.lock().insert(key.into(), entry);
    }

    /// Returns the value stored for `key`, if it has not been reaped yet
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.lock().get(key).map(|entry| entry.value.clone())
    }

    /// Number of entries currently held, including expired ones awaiting a sweep
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// The configured expiry interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Stops the reaper and waits for it to finish
    pub async fn shutdown(mut self) {
        self.shutdown.cancel();
        if let Some(reaper) = self.reaper.take() {
            if let Err(e) = reaper.await {
                tracing::warn!(error = %e, "cache reaper ended abnormally");
            }
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
