//! Quote source abstraction and implementations.
//!
//! This module contains:
//! - The `QuoteSource` trait the snapshot updater fetches through
//! - The Finnhub implementation
//!
//! Sources receive the roster `TickerSpec` directly; there is no symbol
//! resolution layer because the roster is fixed and the symbols are already
//! in the provider's native form.

mod traits;

pub mod finnhub;

// Re-exports
pub use traits::QuoteSource;
