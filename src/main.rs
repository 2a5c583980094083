//! Pokedex - Explore PokeAPI location areas from an interactive prompt
//!
//! Every API response is cached in memory and reaped once it is older than
//! the configured interval.

use anyhow::Context;
use tokio::io::BufReader;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cache::repl::{self, Session};
use pokedex_cache::{Config, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Build the cached API client, which starts the cache reap task
/// 4. Run the prompt until `exit`, EOF or Ctrl+C
/// 5. Stop the reap task
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: fetch_timeout={}s, reap_interval={}s, base_url={}",
        config.fetch_timeout_secs, config.reap_interval_secs, config.base_url
    );

    let client = PokeApiClient::from_config(&config).context("failed to build HTTP client")?;
    let mut session = Session::new(client.clone());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    tokio::select! {
        result = repl::run(&mut session, stdin, &mut stdout) => {
            result.context("prompt I/O failed")?;
        }
        _ = signal::ctrl_c() => {
            println!();
            info!("Received Ctrl+C, exiting");
        }
    }

    if !client.cache.is_reaping() {
        warn!("Cache reap task had already stopped");
    }
    client.shutdown();
    info!("Cache reap task stopped");
    Ok(())
}
