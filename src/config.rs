//! Configuration types for trendspan

use serde::Deserialize;
use thiserror::Error;

/// Trend identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TrendConfig {
    /// Run length (exclusive) a decline must exceed to qualify as a trend
    #[serde(default = "default_window_size")]
    pub window_size: usize,

    /// Maximum number of segments to emit per direction
    #[serde(default = "default_trend_limit")]
    pub trend_limit: usize,

    /// Caller-supplied segment labels; auto-generated when absent
    #[serde(default)]
    pub labels: Option<Vec<String>>,

    /// Which directional scans to run
    #[serde(default)]
    pub identify: Identify,
}

/// Which trend directions to identify
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Identify {
    #[default]
    Both,
    Up,
    Down,
}

fn default_window_size() -> usize {
    5
}
fn default_trend_limit() -> usize {
    3
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window_size: 5,
            trend_limit: 3,
            labels: None,
            identify: Identify::Both,
        }
    }
}

impl TrendConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TrendConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check the configuration before any scan runs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size < 3 {
            return Err(ConfigError::WindowTooSmall {
                window_size: self.window_size,
            });
        }

        if self.trend_limit < 1 {
            return Err(ConfigError::LimitTooSmall {
                trend_limit: self.trend_limit,
            });
        }

        if let Some(labels) = &self.labels {
            if labels.len() != self.trend_limit {
                return Err(ConfigError::LabelCountMismatch {
                    expected: self.trend_limit,
                    actual: labels.len(),
                });
            }
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("window_size must be at least 3, got {window_size}")]
    WindowTooSmall { window_size: usize },

    #[error("trend_limit must be at least 1, got {trend_limit}")]
    LimitTooSmall { trend_limit: usize },

    #[error("labels length ({actual}) must equal trend_limit ({expected})")]
    LabelCountMismatch { expected: usize, actual: usize },

    #[error("symbol is mandatory and must be non-empty")]
    MissingSymbol,

    #[error("malformed date '{input}', expected dd/mm/yyyy")]
    MalformedDate { input: String },

    #[error("date range is inverted: {from} is not before {to}")]
    InvertedDateRange {
        from: chrono::NaiveDate,
        to: chrono::NaiveDate,
    },
}
