//! trendspan: trend segmentation for univariate financial time series
//!
//! This library provides the core components for:
//! - Validated daily price series construction
//! - Single-pass rolling-mean trend scanning (up and down)
//! - Cross-direction overlap resolution by calendar span
//! - Segment labeling and result-table construction
//! - A collaborator seam for historical data sources

pub mod config;
pub mod error;
pub mod identify;
pub mod label;
pub mod resolve;
pub mod scan;
pub mod series;
pub mod source;
