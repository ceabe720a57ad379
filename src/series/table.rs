//! Result table
//!
//! The input series augmented with one optional label cell per direction.
//! Rows inside a surviving segment's inclusive range carry that segment's
//! label; all other rows stay unset.

use chrono::NaiveDate;
use serde::Serialize;

use super::types::PriceSeries;
use crate::label::LabeledSegment;
use crate::scan::Direction;

/// One output row: the observation plus its trend label cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub date: NaiveDate,
    pub close: f64,
    #[serde(rename = "Up Trend", skip_serializing_if = "Option::is_none")]
    pub up_trend: Option<String>,
    #[serde(rename = "Down Trend", skip_serializing_if = "Option::is_none")]
    pub down_trend: Option<String>,
}

/// The annotated output table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendTable {
    rows: Vec<TrendRow>,
}

impl TrendTable {
    /// Build an unlabeled table mirroring the series
    pub fn from_series(series: &PriceSeries) -> Self {
        let rows = series
            .dates()
            .iter()
            .zip(series.values())
            .map(|(&date, &close)| TrendRow {
                date,
                close,
                up_trend: None,
                down_trend: None,
            })
            .collect();
        Self { rows }
    }

    /// Write each segment's label into its inclusive row range
    pub fn apply(&mut self, direction: Direction, labeled: &[LabeledSegment]) {
        for entry in labeled {
            for row in &mut self.rows[entry.segment.start..=entry.segment.end] {
                match direction {
                    Direction::Up => row.up_trend = Some(entry.label.clone()),
                    Direction::Down => row.down_trend = Some(entry.label.clone()),
                }
            }
        }
    }

    pub fn rows(&self) -> &[TrendRow] {
        &self.rows
    }

    /// Distinct labels present in a direction's column, in row order
    pub fn labels(&self, direction: Direction) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for row in &self.rows {
            let cell = match direction {
                Direction::Up => row.up_trend.as_deref(),
                Direction::Down => row.down_trend.as_deref(),
            };
            if let Some(label) = cell {
                if !seen.contains(&label) {
                    seen.push(label);
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Segment;

    fn series() -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        PriceSeries::from_daily(start, &[10.0, 9.0, 8.0, 7.0, 9.0, 10.0]).unwrap()
    }

    #[test]
    fn test_fresh_table_has_no_labels() {
        let table = TrendTable::from_series(&series());
        assert_eq!(table.rows().len(), 6);
        assert!(table.rows().iter().all(|r| r.up_trend.is_none()));
        assert!(table.rows().iter().all(|r| r.down_trend.is_none()));
    }

    #[test]
    fn test_apply_fills_inclusive_range() {
        let mut table = TrendTable::from_series(&series());
        let labeled = vec![LabeledSegment::new(Segment::new(1, 3), "A")];
        table.apply(Direction::Down, &labeled);

        let cells: Vec<Option<&str>> = table
            .rows()
            .iter()
            .map(|r| r.down_trend.as_deref())
            .collect();
        assert_eq!(
            cells,
            vec![None, Some("A"), Some("A"), Some("A"), None, None]
        );
        assert!(table.rows().iter().all(|r| r.up_trend.is_none()));
    }

    #[test]
    fn test_directions_write_separate_columns() {
        let mut table = TrendTable::from_series(&series());
        table.apply(Direction::Down, &[LabeledSegment::new(Segment::new(0, 2), "A")]);
        table.apply(Direction::Up, &[LabeledSegment::new(Segment::new(2, 4), "A")]);

        let row = &table.rows()[2];
        assert_eq!(row.down_trend.as_deref(), Some("A"));
        assert_eq!(row.up_trend.as_deref(), Some("A"));
    }

    #[test]
    fn test_labels_reports_row_order() {
        let mut table = TrendTable::from_series(&series());
        table.apply(
            Direction::Down,
            &[
                LabeledSegment::new(Segment::new(0, 1), "A"),
                LabeledSegment::new(Segment::new(3, 4), "B"),
            ],
        );
        assert_eq!(table.labels(Direction::Down), vec!["A", "B"]);
        assert!(table.labels(Direction::Up).is_empty());
    }

    #[test]
    fn test_serialized_column_names() {
        let mut table = TrendTable::from_series(&series());
        table.apply(Direction::Down, &[LabeledSegment::new(Segment::new(0, 1), "A")]);

        let json = serde_json::to_value(table.rows()).unwrap();
        assert_eq!(json[0]["Down Trend"], "A");
        assert!(json[0].get("Up Trend").is_none());
        assert_eq!(json[2].get("Down Trend"), None);
    }
}
