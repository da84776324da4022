//! Pokedex CLI - explore PokeAPI from an interactive prompt
//!
//! Lists location areas, explores them, and catches pokemon. API responses are
//! held in an in-memory cache that forgets them after a configurable interval.

use std::io;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use pokedex::app::App;
use pokedex::cache::Cache;
use pokedex::cli::{Cli, StartupConfig};
use pokedex::commands::CommandRegistry;
use pokedex::data::PokeApiClient;
use pokedex::repl;

/// Sends logs to stderr so they never interleave with REPL output on stdout
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    init_tracing(config.log_filter);
    tracing::info!(
        api_url = config.api_url.as_str(),
        cache_interval_secs = config.cache_interval.as_secs(),
        "starting pokedex"
    );

    let cache = Cache::new(config.cache_interval)?;
    let client = PokeApiClient::with_base_url(cache, config.api_url);
    let registry = CommandRegistry::with_defaults();
    let mut app = App::new(client);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    let result = repl::run(&registry, &mut app, stdin, &mut stdout).await;

    app.client.into_cache().shutdown().await;
    tracing::info!("pokedex closed");

    result?;
    Ok(())
}
