//! Finnhub quote source implementation.
//!
//! Retrieves per-ticker data from two Finnhub endpoints:
//! - /quote for the day's percentage change (`dp`)
//! - /stock/profile2 for market capitalization (`marketCapitalization`)
//!
//! Both requests for a ticker run concurrently and are joined before the
//! record is assembled; either failure fails the whole ticker. Finnhub free
//! tier is limited to 60 API calls per minute, which is why the updater
//! paces between tickers.
//! API documentation: https://finnhub.io/docs/api

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::errors::{Endpoint, MarketDataError};
use crate::models::{QuoteRecord, TickerSpec};
use crate::provider::QuoteSource;

const BASE_URL: &str = "https://finnhub.io/api/v1";
const SOURCE_ID: &str = "FINNHUB";

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /quote endpoint
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    /// Percent change on the day
    #[serde(default, deserialize_with = "numeric_or_null")]
    dp: Option<f64>,
    // Note: c (current), o, h, l, pc, t exist but are not used
}

/// Response from /stock/profile2 endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    /// Market capitalization in billions, carried through as provided
    #[serde(default, deserialize_with = "numeric_or_null")]
    market_capitalization: Option<f64>,
    // Note: name, ticker, exchange, currency etc. exist but are not used
}

/// Lenient numeric boundary for provider payloads.
///
/// JSON numbers carry through; anything else the provider puts in the field
/// (null, string, bool, nested value) normalizes to `None`. Absent fields
/// are handled by `#[serde(default)]` on the call sites.
fn numeric_or_null<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

// ============================================================================
// FinnhubProvider
// ============================================================================

/// Finnhub quote source.
///
/// Stateless across calls: each `fetch_record` issues its own pair of
/// requests and owns nothing afterwards.
pub struct FinnhubProvider {
    client: Client,
    api_key: String,
}

impl FinnhubProvider {
    /// Create a new Finnhub source with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Make a GET request to one Finnhub endpoint and decode its JSON body.
    ///
    /// The symbol and the credential travel as query parameters. A
    /// non-success status becomes an `Endpoint` error naming `endpoint`;
    /// transport and body-decode failures surface as `Network`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        symbol: &str,
        endpoint: Endpoint,
    ) -> Result<T, MarketDataError> {
        let url = format!("{}{}", BASE_URL, path);

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol), ("token", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Endpoint {
                symbol: symbol.to_string(),
                endpoint,
                status,
            });
        }

        Ok(response.json::<T>().await?)
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<QuoteResponse, MarketDataError> {
        self.get_json("/quote", symbol, Endpoint::Quote).await
    }

    async fn fetch_profile(&self, symbol: &str) -> Result<ProfileResponse, MarketDataError> {
        self.get_json("/stock/profile2", symbol, Endpoint::Profile)
            .await
    }
}

#[async_trait]
impl QuoteSource for FinnhubProvider {
    fn id(&self) -> &'static str {
        SOURCE_ID
    }

    async fn fetch_record(&self, ticker: &TickerSpec) -> Result<QuoteRecord, MarketDataError> {
        debug!("fetching quote and profile for {}", ticker.symbol);

        // Fork-join of width 2: the first failure short-circuits the join,
        // carrying the failing endpoint in the error.
        let (quote, profile) = tokio::try_join!(
            self.fetch_quote(ticker.symbol),
            self.fetch_profile(ticker.symbol),
        )?;

        Ok(QuoteRecord::new(
            ticker,
            quote.dp,
            profile.market_capitalization,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
