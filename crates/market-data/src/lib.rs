//! Megacap Market Data Crate
//!
//! This crate provides the market data fetching path for the megacap
//! dashboard: it retrieves a quote and a company profile for each ticker in
//! the fixed mega-cap roster from the Finnhub API and aggregates the results
//! into a single snapshot.
//!
//! # Overview
//!
//! The crate supports:
//! - A fixed, ordered roster of tracked tickers
//! - Concurrent quote + profile retrieval per ticker, joined before use
//! - Sequential pacing across tickers to stay friendly to API limits
//! - Fail-fast aggregation: a snapshot exists only if every ticker succeeded
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  TICKERS roster  |  (static registry, defines output order)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | SnapshotUpdater  |  (sequential loop, fixed pacing, fail-fast)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |   QuoteSource    |  (Finnhub: /quote + /stock/profile2, joined)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |     Snapshot     |  (timestamp + ordered QuoteRecord items)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`TickerSpec`] - One tracked ticker with its display metadata
//! - [`QuoteRecord`] - Normalized per-ticker result of one fetch
//! - [`Snapshot`] - The aggregate result of one complete, successful run
//! - [`QuoteSource`] - Trait implemented by quote providers
//! - [`FinnhubProvider`] - The Finnhub implementation of [`QuoteSource`]
//! - [`SnapshotUpdater`] - Drives the roster through a source into a snapshot

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;
pub mod updater;

// Re-export all public types from models
pub use models::{QuoteRecord, Snapshot, TickerSpec};

// Re-export provider types
pub use provider::finnhub::FinnhubProvider;
pub use provider::QuoteSource;

// Re-export registry data
pub use registry::TICKERS;

// Re-export updater types
pub use updater::{SnapshotUpdater, PACING_INTERVAL};

// Re-export error types
pub use errors::{Endpoint, MarketDataError};
