//! Library layer for fintrack: price history, fundamentals, and trend analysis.
//!
//! Wraps the `fintrack_api` crate and the `yahoo_finance_api` chart client
//! behind [`MarketData`], which gathers everything one ticker needs into a
//! [`StockSnapshot`]. Snapshots are plain data: every rendering and analysis
//! step takes one by reference.

pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod financials;
pub mod options;
pub mod ownership;
pub mod recommendations;
pub mod section;
pub mod series;
pub mod snapshot;
pub mod trend;
pub mod validation;
pub mod yahoo;

pub use fintrack_api;
pub use fintrack_api::types;

pub use chart::{Chart, ChartKind, ChartPoint, ChartSet};
pub use client::MarketData;
pub use config::Settings;
pub use error::FinTrackError;
pub use section::Section;
pub use series::{Dividend, PriceBar, PriceSeries};
pub use snapshot::{CompanyProfile, Fundamentals, StockSnapshot};
pub use trend::{Suggestion, TrendAnalysis, TrendLabel, TrendOutcome};
