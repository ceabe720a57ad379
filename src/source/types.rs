//! Historical request types

use chrono::NaiveDate;

use crate::config::ConfigError;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// A validated request for historical daily closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalRequest {
    pub symbol: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl HistoricalRequest {
    /// Build a request from pre-parsed dates
    pub fn new(
        symbol: impl Into<String>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Self, ConfigError> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(ConfigError::MissingSymbol);
        }
        if from >= to {
            return Err(ConfigError::InvertedDateRange { from, to });
        }
        Ok(Self { symbol, from, to })
    }

    /// Parse a request from `dd/mm/yyyy` date strings
    pub fn parse(symbol: &str, from: &str, to: &str) -> Result<Self, ConfigError> {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        Self::new(symbol, from, to)
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| ConfigError::MalformedDate {
        input: input.to_string(),
    })
}
