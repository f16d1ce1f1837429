//! Mega-cap snapshot updater.
//!
//! Fetches a quote and a company profile for every ticker in the mega-cap
//! roster from Finnhub and rewrites the dashboard artifact
//! (`data/latest.json` by default). The API key comes from the
//! `FINNHUB_KEY` environment variable, never from the code.
//!
//! Exit status is 0 after a fully successful run and 1 when the credential
//! is missing or any ticker's fetch fails; on failure the previous artifact
//! is left untouched.

mod config;
mod writer;

use std::sync::Arc;

use config::Config;
use megacap_market_data::{FinnhubProvider, SnapshotUpdater, TICKERS};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use writer::SnapshotWriter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // The credential check happens before any network activity.
    let config = Config::from_env()?;

    let provider = Arc::new(FinnhubProvider::new(config.api_key));
    let updater = SnapshotUpdater::new(provider);

    let snapshot = updater.run(TICKERS).await?;

    let writer = SnapshotWriter::new(&config.output_path);
    writer.write(&snapshot)?;

    tracing::info!(
        "updated {} with {} tickers",
        writer.path().display(),
        snapshot.items.len()
    );
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
