//! Historical data source seam
//!
//! The core never fetches data itself. Callers that want the
//! retrieval-first entry points inject an implementation of
//! [`HistoricalSource`]; any failure it reports is wrapped as a data-source
//! error, distinct from configuration errors.

mod types;

pub use types::HistoricalRequest;

use crate::series::PriceSeries;

/// Trait for historical market-data providers
pub trait HistoricalSource {
    /// Fetch the daily close series for a request's symbol and date range
    fn daily_closes(&self, request: &HistoricalRequest) -> anyhow::Result<PriceSeries>;
}
