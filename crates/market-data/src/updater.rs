//! Sequential snapshot update loop.
//!
//! Drives the roster through a [`QuoteSource`] one ticker at a time,
//! pacing between calls, and assembles the final [`Snapshot`]. The loop is
//! fail-fast: the first fetch error aborts the run and discards whatever was
//! accumulated, because a snapshot with missing tickers is worse for the
//! dashboard than no update at all.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::MarketDataError;
use crate::models::{Snapshot, TickerSpec};
use crate::provider::QuoteSource;

/// Fixed delay inserted between successive tickers.
///
/// A single fixed interval is enough of a rate limiter because ticker
/// processing is strictly sequential; nothing else competes for the API.
pub const PACING_INTERVAL: Duration = Duration::from_millis(300);

/// Drives the roster through a quote source into a single snapshot.
///
/// The accumulation buffer lives inside [`run`](Self::run) and is owned by
/// it exclusively; the source never sees it.
pub struct SnapshotUpdater {
    source: Arc<dyn QuoteSource>,
    pacing: Duration,
}

impl SnapshotUpdater {
    /// Create an updater with the production pacing interval.
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self::with_pacing(source, PACING_INTERVAL)
    }

    /// Create an updater with a custom pacing interval.
    pub fn with_pacing(source: Arc<dyn QuoteSource>, pacing: Duration) -> Self {
        Self { source, pacing }
    }

    /// Run one update over `registry`, in registry order.
    ///
    /// Fetches every ticker sequentially, suspending for the pacing interval
    /// between tickers (never before the first, never after the last). The
    /// first failure aborts the whole run; no further tickers are attempted.
    /// On full success, returns a snapshot stamped at assembly time whose
    /// `items` match `registry` index for index.
    pub async fn run(&self, registry: &[TickerSpec]) -> Result<Snapshot, MarketDataError> {
        info!(
            "updating {} tickers via {}",
            registry.len(),
            self.source.id()
        );

        let mut items = Vec::with_capacity(registry.len());

        for (index, ticker) in registry.iter().enumerate() {
            debug!(
                "fetching {} ({}/{})",
                ticker.symbol,
                index + 1,
                registry.len()
            );

            let record = self.source.fetch_record(ticker).await?;
            items.push(record);

            if index + 1 < registry.len() {
                tokio::time::sleep(self.pacing).await;
            }
        }

        info!("all {} tickers fetched", items.len());
        Ok(Snapshot::new(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Endpoint;
    use crate::models::QuoteRecord;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const ROSTER: &[TickerSpec] = &[
        TickerSpec {
            symbol: "NVDA",
            name_jp: "エヌビディア",
            company: "NVIDIA",
            sector: "半導体・電子テクノロジー",
        },
        TickerSpec {
            symbol: "MSFT",
            name_jp: "マイクロソフト",
            company: "Microsoft",
            sector: "テクノロジーサービス",
        },
        TickerSpec {
            symbol: "AMZN",
            name_jp: "アマゾン・ドット・コム",
            company: "Amazon.com",
            sector: "小売・インターネット",
        },
    ];

    struct MockSource {
        call_count: AtomicUsize,
        fail_at: Option<usize>,
    }

    impl MockSource {
        fn new(fail_at: Option<usize>) -> Self {
            Self {
                call_count: AtomicUsize::new(0),
                fail_at,
            }
        }
    }

    #[async_trait]
    impl QuoteSource for MockSource {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn fetch_record(
            &self,
            ticker: &TickerSpec,
        ) -> Result<QuoteRecord, MarketDataError> {
            let index = self.call_count.fetch_add(1, Ordering::SeqCst);

            if Some(index) == self.fail_at {
                return Err(MarketDataError::Endpoint {
                    symbol: ticker.symbol.to_string(),
                    endpoint: Endpoint::Profile,
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                });
            }

            Ok(QuoteRecord::new(ticker, Some(index as f64), Some(100.0)))
        }
    }

    #[tokio::test]
    async fn test_run_preserves_roster_order_and_length() {
        let source = Arc::new(MockSource::new(None));
        let updater = SnapshotUpdater::with_pacing(source, Duration::ZERO);

        let snapshot = updater.run(ROSTER).await.unwrap();

        assert_eq!(snapshot.items.len(), ROSTER.len());
        for (index, ticker) in ROSTER.iter().enumerate() {
            assert_eq!(snapshot.items[index].symbol, ticker.symbol);
        }
    }

    #[tokio::test]
    async fn test_run_aborts_on_first_failure() {
        let source = Arc::new(MockSource::new(Some(1)));
        let updater = SnapshotUpdater::with_pacing(source.clone(), Duration::ZERO);

        let error = updater.run(ROSTER).await.unwrap_err();

        // The failing ticker was attempted, nothing after it
        assert_eq!(source.call_count.load(Ordering::SeqCst), 2);

        let rendered = format!("{}", error);
        assert!(rendered.contains("MSFT"));
        assert!(rendered.contains("profile"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_performs_exactly_n_minus_one_delays() {
        let source = Arc::new(MockSource::new(None));
        let updater = SnapshotUpdater::new(source);

        let started = tokio::time::Instant::now();
        updater.run(ROSTER).await.unwrap();

        // Three tickers, two pacing delays, nothing before the first or
        // after the last. The mock fetch itself takes no virtual time.
        assert_eq!(started.elapsed(), PACING_INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_ticker_run_has_no_delay() {
        let source = Arc::new(MockSource::new(None));
        let updater = SnapshotUpdater::new(source);

        let started = tokio::time::Instant::now();
        updater.run(&ROSTER[..1]).await.unwrap();

        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_run_does_not_pace_after_the_failure() {
        let source = Arc::new(MockSource::new(Some(0)));
        let updater = SnapshotUpdater::new(source);

        let started = tokio::time::Instant::now();
        updater.run(ROSTER).await.unwrap_err();

        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
