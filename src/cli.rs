//! Command-line interface parsing for the Pokedex CLI
//!
//! This module handles parsing of CLI arguments using clap. Every flag can also
//! be set from the environment.

use clap::{ArgAction, Parser};
use std::time::Duration;
use thiserror::Error;

use crate::data::POKEAPI_BASE_URL;

/// Default cache interval in seconds
pub const DEFAULT_CACHE_INTERVAL_SECS: u64 = 10;

/// Longest accepted cache interval in seconds (one year)
pub const MAX_CACHE_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The cache interval must be between one second and one year
    #[error(
        "Invalid cache interval: {0}s. The interval must be between 1 and {max} seconds",
        max = MAX_CACHE_INTERVAL_SECS
    )]
    InvalidCacheInterval(u64),
}

/// Pokedex CLI - explore the Pokemon world from your terminal
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Seconds an API response stays cached before it is reaped
    #[arg(
        long,
        value_name = "SECONDS",
        env = "POKEDEX_CACHE_INTERVAL",
        default_value_t = DEFAULT_CACHE_INTERVAL_SECS
    )]
    pub cache_interval: u64,

    /// Base URL of the PokeAPI server
    #[arg(long, value_name = "URL", env = "POKEDEX_API_URL", default_value = POKEAPI_BASE_URL)]
    pub api_url: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Cache expiry and sweep interval
    pub cache_interval: Duration,
    /// PokeAPI base URL
    pub api_url: String,
    /// Log filter used when RUST_LOG is unset
    pub log_filter: &'static str,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with validated settings
    /// * `Err(CliError)` if the cache interval is zero or longer than a year
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        if !(1..=MAX_CACHE_INTERVAL_SECS).contains(&cli.cache_interval) {
            return Err(CliError::InvalidCacheInterval(cli.cache_interval));
        }

        Ok(StartupConfig {
            cache_interval: Duration::from_secs(cli.cache_interval),
            api_url: cli.api_url.clone(),
            log_filter: log_filter(cli.verbose),
        })
    }
}

/// Maps a `-v` count to a log filter
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
