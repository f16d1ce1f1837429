//! Error types for the market data crate.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// One of the two remote resources queried per ticker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endpoint {
    /// The `/quote` endpoint (price and percentage change).
    Quote,
    /// The `/stock/profile2` endpoint (company profile, market cap).
    Profile,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Quote => write!(f, "quote"),
            Endpoint::Profile => write!(f, "profile"),
        }
    }
}

/// Errors that can occur during a snapshot update.
///
/// Endpoint and network failures are never recovered locally - any one of
/// them aborts the whole run without a partial snapshot. A present but
/// non-numeric response field is not an error; it normalizes to `None` at
/// the decode boundary.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The `FINNHUB_KEY` credential is not set.
    /// Detected before any network activity; the run never starts.
    #[error("FINNHUB_KEY environment variable is not set")]
    MissingApiKey,

    /// One endpoint returned a non-success HTTP status for one ticker.
    /// Names which of the two endpoints failed; neither endpoint's failure
    /// is inferred from the other.
    #[error("{endpoint} endpoint returned HTTP {status} for {symbol}")]
    Endpoint {
        /// The ticker whose fetch failed
        symbol: String,
        /// Which of the two endpoints failed
        endpoint: Endpoint,
        /// The non-success status the endpoint returned
        status: StatusCode,
    },

    /// A transport-level failure: connection, timeout, or an undecodable
    /// response body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
