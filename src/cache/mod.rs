//! Cache module for holding API responses in memory
//!
//! Responses are keyed by request URL and kept as raw bytes. A background reaper
//! owned by each cache removes entries once they reach the configured interval,
//! so reads stay a single map lookup with no age check.

mod reaper;
mod store;

pub use store::{Cache, CacheError};
