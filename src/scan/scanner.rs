//! Single-pass run scanner
//!
//! Walks the series once, accumulating a candidate run while each value stays
//! strictly below the run's running mean. A value above the mean is a
//! reversal: if the run outlasted `window_size`, a segment is emitted,
//! anchored at the run's first minimum rather than at the reversal point.

use super::types::Segment;

/// Scan a value series for declining runs longer than `window_size`
///
/// `limit` caps the number of emitted segments and stops the pass early once
/// reached; `None` scans the whole series.
///
/// The no-signal branch (running mean unset, or value exactly equal to it)
/// re-arms the run from the current index without clearing the accumulated
/// values: only a strict decrease extends a run while keeping its start.
/// Downstream consumers depend on this tie-breaking behavior.
pub fn scan(values: &[f64], window_size: usize, limit: Option<usize>) -> Vec<Segment> {
    let mut segments = Vec::new();

    let mut running_mean: Option<f64> = None;
    let mut run: Vec<f64> = Vec::new();
    let mut run_start = 0usize;

    for (index, &value) in values.iter().enumerate() {
        match running_mean {
            Some(mean) if value < mean => {
                run.push(value);
                running_mean = Some(mean_of(&run));
            }
            Some(mean) if value > mean => {
                if run.len() > window_size {
                    let offset = first_minimum(&run);
                    // The re-arm branch moves `run_start` forward without
                    // clearing the buffer, so the extremum offset can point
                    // past the series; clamp to the last row.
                    let end = (run_start + offset).min(values.len() - 1);
                    segments.push(Segment::new(run_start, end));

                    if limit.is_some_and(|n| segments.len() >= n) {
                        break;
                    }
                }

                running_mean = None;
                run.clear();
            }
            _ => {
                run_start = index;
                run.push(value);
                running_mean = Some(mean_of(&run));
            }
        }
    }

    segments
}

fn mean_of(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Index of the first occurrence of the minimum value
fn first_minimum(values: &[f64]) -> usize {
    let mut best = 0;
    for (index, &value) in values.iter().enumerate() {
        if value < values[best] {
            best = index;
        }
    }
    best
}
