//! Overlap resolution module
//!
//! When both directions are scanned, an up candidate and a down candidate can
//! claim intersecting date ranges. The shorter claim loses: a candidate is
//! discarded when some opposite-direction candidate overlaps it and spans
//! strictly more calendar days. Equal spans keep both, and segments that only
//! touch at an endpoint are not considered overlapping.

use crate::scan::Segment;
use crate::series::PriceSeries;

/// Cross-filter up and down candidates, dropping strictly shorter overlaps
///
/// Only meaningful when both directions were requested; single-direction
/// scans bypass resolution entirely.
pub fn resolve_overlaps(
    series: &PriceSeries,
    up: Vec<Segment>,
    down: Vec<Segment>,
) -> (Vec<Segment>, Vec<Segment>) {
    let up_final: Vec<Segment> = up
        .iter()
        .filter(|candidate| !loses_to_any(series, candidate, &down))
        .copied()
        .collect();

    let down_final: Vec<Segment> = down
        .iter()
        .filter(|candidate| !loses_to_any(series, candidate, &up))
        .copied()
        .collect();

    (up_final, down_final)
}

fn loses_to_any(series: &PriceSeries, candidate: &Segment, opponents: &[Segment]) -> bool {
    opponents.iter().any(|opponent| {
        overlaps(candidate, opponent) && span_days(series, opponent) > span_days(series, candidate)
    })
}

/// Strict interior containment of either endpoint of `a` within `b`
fn overlaps(a: &Segment, b: &Segment) -> bool {
    let interior = |index: usize| b.start < index && index < b.end;
    interior(a.start) || interior(a.end)
}

/// Elapsed calendar days between a segment's bounds
fn span_days(series: &PriceSeries, segment: &Segment) -> i64 {
    (series.date(segment.end) - series.date(segment.start)).num_days()
}
