//! Price series module
//!
//! Validated daily close series plus the result table the identification
//! pipeline writes its labels into. Construction is the validation boundary:
//! everything downstream assumes an ordered, finite, non-empty series.

mod table;
mod types;

pub use table::{TrendRow, TrendTable};
pub use types::{Observation, PriceSeries, SeriesError};
