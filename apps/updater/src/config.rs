//! Environment-driven configuration for the updater.

use std::env;
use std::path::PathBuf;

use megacap_market_data::MarketDataError;

/// Default artifact location, relative to the working directory.
const DEFAULT_OUTPUT_PATH: &str = "data/latest.json";

/// Runtime configuration, read once at startup.
pub struct Config {
    /// Finnhub API credential, shared read-only by every fetch
    pub api_key: String,
    /// Where the snapshot artifact is written
    pub output_path: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `FINNHUB_KEY` is required and checked here, before any network
    /// activity; an empty value counts as missing. `MEGACAP_OUTPUT`
    /// optionally overrides the artifact path.
    pub fn from_env() -> Result<Self, MarketDataError> {
        let api_key = env::var("FINNHUB_KEY").unwrap_or_default();
        if api_key.is_empty() {
            return Err(MarketDataError::MissingApiKey);
        }

        let output_path = env::var("MEGACAP_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Ok(Self {
            api_key,
            output_path,
        })
    }
}
