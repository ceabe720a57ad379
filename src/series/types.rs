//! Price series types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single dated close observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date (series key, strictly ascending)
    pub date: NaiveDate,
    /// Closing value
    pub close: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Series validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("series is empty")]
    Empty,

    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("dates out of order at index {index}")]
    OutOfOrder { index: usize },

    #[error("duplicate date {date}")]
    DuplicateDate { date: NaiveDate },
}

/// An ordered, validated series of daily closes
///
/// Dates are strictly ascending and values finite; both are enforced at
/// construction so the scanner and resolver can stay error-free.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from observations, validating order and values
    pub fn new(observations: Vec<Observation>) -> Result<Self, SeriesError> {
        if observations.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (index, obs) in observations.iter().enumerate() {
            if !obs.close.is_finite() {
                return Err(SeriesError::NonFinite { index });
            }
            if index > 0 {
                let prev = observations[index - 1].date;
                if obs.date == prev {
                    return Err(SeriesError::DuplicateDate { date: obs.date });
                }
                if obs.date < prev {
                    return Err(SeriesError::OutOfOrder { index });
                }
            }
        }

        let dates = observations.iter().map(|o| o.date).collect();
        let values = observations.iter().map(|o| o.close).collect();
        Ok(Self { dates, values })
    }

    /// Convenience constructor for consecutive calendar days
    pub fn from_daily(start: NaiveDate, values: &[f64]) -> Result<Self, SeriesError> {
        let observations = values
            .iter()
            .enumerate()
            .map(|(i, &close)| Observation::new(start + chrono::Days::new(i as u64), close))
            .collect();
        Self::new(observations)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Close values in date order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Dates in ascending order
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Date at a positional index
    ///
    /// Panics if `index` is out of bounds; callers hold segment indices that
    /// came from scanning this same series.
    pub fn date(&self, index: usize) -> NaiveDate {
        self.dates[index]
    }

    /// Close value at a positional index
    pub fn close(&self, index: usize) -> f64 {
        self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_empty_series_rejected() {
        assert_eq!(PriceSeries::new(vec![]), Err(SeriesError::Empty));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let obs = vec![
            Observation::new(day(1), 10.0),
            Observation::new(day(2), f64::NAN),
        ];
        assert_eq!(
            PriceSeries::new(obs),
            Err(SeriesError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn test_duplicate_date_rejected() {
        let obs = vec![
            Observation::new(day(1), 10.0),
            Observation::new(day(1), 11.0),
        ];
        assert_eq!(
            PriceSeries::new(obs),
            Err(SeriesError::DuplicateDate { date: day(1) })
        );
    }

    #[test]
    fn test_out_of_order_dates_rejected() {
        let obs = vec![
            Observation::new(day(5), 10.0),
            Observation::new(day(2), 11.0),
        ];
        assert_eq!(
            PriceSeries::new(obs),
            Err(SeriesError::OutOfOrder { index: 1 })
        );
    }

    #[test]
    fn test_from_daily_assigns_consecutive_dates() {
        let series = PriceSeries::from_daily(day(1), &[10.0, 9.0, 8.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.date(0), day(1));
        assert_eq!(series.date(2), day(3));
        assert_eq!(series.close(1), 9.0);
    }
}
