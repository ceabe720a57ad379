//! Top-level error taxonomy
//!
//! Separates "bad request" (configuration and series validation, raised
//! before any scan runs) from "bad environment" (a historical data source
//! failing at retrieval time). The core algorithm itself never fails on
//! validated input.

use thiserror::Error;

use crate::config::ConfigError;
use crate::series::SeriesError;

/// Errors surfaced by the trend identification entry points
#[derive(Debug, Error)]
pub enum TrendError {
    /// Invalid configuration or request parameters
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The input series failed validation
    #[error("invalid series: {0}")]
    Series(#[from] SeriesError),

    /// The historical data source failed at retrieval time
    #[error("data source request failed: {0}")]
    DataSource(#[source] anyhow::Error),
}
