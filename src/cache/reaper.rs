//! Background sweep that removes expired cache entries

use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::store::{CacheEntry, SharedEntries};

/// Runs sweeps every `interval`, starting at `first_sweep`, until `shutdown` is cancelled
pub(crate) async fn run(
    entries: SharedEntries,
    interval: Duration,
    first_sweep: Instant,
    shutdown: CancellationToken,
) {
    let mut ticker = tokio::time::interval_at(first_sweep, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::debug!("cache reaper stopped");
                break;
            }
            now = ticker.tick() => {
                let removed = reap(&entries, interval, now);
                if removed > 0 {
                    tracing::debug!(removed, "reaped expired cache entries");
                }
            }
        }
    }
}

/// Removes every entry at least `interval` old as of `now`, returning how many were removed
pub(crate) fn reap(
    entries: &Mutex<HashMap<String, CacheEntry>>,
    interval: Duration,
    now: Instant,
) -> usize {
    let mut entries = entries.lock();
    let before = entries.len();
    entries.retain(|_, entry| now.saturating_duration_since(entry.created_at) < interval);
    before - entries.len()
}
