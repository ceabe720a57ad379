//! Trend identification entry points
//!
//! Orchestrates the three-stage pipeline: scan each requested direction,
//! cross-resolve overlaps when both were requested, then label the survivors
//! into the result table. Configuration is validated before any scan runs;
//! the stages themselves are error-free over a validated series.

use tracing::debug;

use crate::config::{ConfigError, Identify, TrendConfig};
use crate::error::TrendError;
use crate::label::assign_labels;
use crate::resolve::resolve_overlaps;
use crate::scan::{scan, Direction, Segment};
use crate::series::{PriceSeries, TrendTable};
use crate::source::{HistoricalRequest, HistoricalSource};

/// Identify up to `trend_limit` trends per requested direction
///
/// Caller-supplied labels (validated against the limit) or auto-generated
/// letters are written into the table's directional columns.
pub fn identify_trends(
    series: &PriceSeries,
    config: &TrendConfig,
) -> Result<TrendTable, TrendError> {
    config.validate()?;
    run_pipeline(
        series,
        config.window_size,
        Some(config.trend_limit),
        config.labels.as_deref(),
        config.identify,
    )
}

/// Identify every qualifying trend, without a per-direction limit
///
/// Labels are always auto-generated in this variant.
pub fn identify_all_trends(
    series: &PriceSeries,
    window_size: usize,
    identify: Identify,
) -> Result<TrendTable, TrendError> {
    if window_size < 3 {
        return Err(ConfigError::WindowTooSmall { window_size }.into());
    }
    run_pipeline(series, window_size, None, None, identify)
}

/// Fetch a series through the injected source, then identify trends
///
/// Source failures are wrapped as [`TrendError::DataSource`] so callers can
/// tell a bad environment from a bad request.
pub fn identify_trends_from(
    source: &dyn HistoricalSource,
    request: &HistoricalRequest,
    config: &TrendConfig,
) -> Result<TrendTable, TrendError> {
    config.validate()?;
    let series = source
        .daily_closes(request)
        .map_err(TrendError::DataSource)?;
    identify_trends(&series, config)
}

/// Fetch a series through the injected source, then identify all trends
///
/// Validation precedes the fetch, matching [`identify_trends_from`].
pub fn identify_all_trends_from(
    source: &dyn HistoricalSource,
    request: &HistoricalRequest,
    window_size: usize,
    identify: Identify,
) -> Result<TrendTable, TrendError> {
    if window_size < 3 {
        return Err(ConfigError::WindowTooSmall { window_size }.into());
    }
    let series = source
        .daily_closes(request)
        .map_err(TrendError::DataSource)?;
    identify_all_trends(&series, window_size, identify)
}

fn run_pipeline(
    series: &PriceSeries,
    window_size: usize,
    limit: Option<usize>,
    labels: Option<&[String]>,
    identify: Identify,
) -> Result<TrendTable, TrendError> {
    let mut table = TrendTable::from_series(series);

    match identify {
        Identify::Both => {
            let up = scan_direction(series, Direction::Up, window_size, limit);
            let down = scan_direction(series, Direction::Down, window_size, limit);
            debug!(
                up_candidates = up.len(),
                down_candidates = down.len(),
                "resolving overlaps"
            );

            let (up, down) = resolve_overlaps(series, up, down);
            debug!(up_final = up.len(), down_final = down.len(), "resolved");

            table.apply(Direction::Up, &assign_labels(&up, labels));
            table.apply(Direction::Down, &assign_labels(&down, labels));
        }
        Identify::Up => {
            let up = scan_direction(series, Direction::Up, window_size, limit);
            table.apply(Direction::Up, &assign_labels(&up, labels));
        }
        Identify::Down => {
            let down = scan_direction(series, Direction::Down, window_size, limit);
            table.apply(Direction::Down, &assign_labels(&down, labels));
        }
    }

    Ok(table)
}

fn scan_direction(
    series: &PriceSeries,
    direction: Direction,
    window_size: usize,
    limit: Option<usize>,
) -> Vec<Segment> {
    let oriented = direction.orient(series.values());
    let segments = scan(&oriented, window_size, limit);
    debug!(?direction, count = segments.len(), "scan complete");
    segments
}
