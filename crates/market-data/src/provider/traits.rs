//! Quote source trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{QuoteRecord, TickerSpec};

/// Trait for sources of per-ticker quote data.
///
/// The snapshot updater drives the roster through a `QuoteSource` one ticker
/// at a time. A source is stateless across calls: each `fetch_record`
/// retrieves everything the record needs and owns nothing afterwards.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Unique identifier for this source, used in logging.
    fn id(&self) -> &'static str;

    /// Fetch and normalize the record for one roster ticker.
    ///
    /// Returns the normalized record on success. Any endpoint or transport
    /// failure is an error for the whole ticker; there is no partial record.
    async fn fetch_record(&self, ticker: &TickerSpec) -> Result<QuoteRecord, MarketDataError>;
}
