//! Segment labeling module
//!
//! Assigns display labels to final segments in discovery order. Labels are
//! either caller-supplied (validated upstream against the trend limit) or
//! auto-generated spreadsheet-style: "A".."Z", then "AA", "AB", ...

use serde::{Deserialize, Serialize};

use crate::scan::Segment;

/// A segment with its assigned display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSegment {
    pub segment: Segment,
    pub label: String,
}

impl LabeledSegment {
    pub fn new(segment: Segment, label: impl Into<String>) -> Self {
        Self {
            segment,
            label: label.into(),
        }
    }
}

/// Pair segments with labels positionally
///
/// Caller labels are zipped onto segments; surplus labels are ignored (the
/// count-vs-limit equality is a config-validation concern, not the labeler's).
/// Without caller labels, sequential alphabet labels are generated.
pub fn assign_labels(segments: &[Segment], labels: Option<&[String]>) -> Vec<LabeledSegment> {
    match labels {
        Some(given) => segments
            .iter()
            .zip(given.iter())
            .map(|(&segment, label)| LabeledSegment::new(segment, label.clone()))
            .collect(),
        None => segments
            .iter()
            .enumerate()
            .map(|(ordinal, &segment)| LabeledSegment::new(segment, alphabet_label(ordinal)))
            .collect(),
    }
}

/// Spreadsheet-style label for a zero-based ordinal: A..Z, AA, AB, ...
fn alphabet_label(mut ordinal: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (ordinal % 26) as u8);
        if ordinal < 26 {
            break;
        }
        ordinal = ordinal / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).expect("ASCII uppercase letters")
}
