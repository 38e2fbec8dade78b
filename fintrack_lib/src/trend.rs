//! Trend classification from daily closing prices.
//!
//! Daily returns are `(p[i] - p[i-1]) / p[i-1]`. Their mean picks the trend
//! label against fixed thresholds, and the label plus a stronger upward
//! threshold picks a one-line suggestion. Input must be chronologically
//! ascending: a reversed series is not the mirror image of the original.

use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

use crate::series::PriceSeries;

/// Mean daily return above which a series is trending upward.
pub const UPWARD_THRESHOLD: f64 = 0.001;
/// Mean daily return below which a series is trending downward.
pub const DOWNWARD_THRESHOLD: f64 = -0.001;
/// Mean daily return above which an upward trend counts as strong.
pub const STRONG_UPWARD_THRESHOLD: f64 = 0.002;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrendLabel {
    Upward,
    Downward,
    Sideways,
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Upward => "UPWARD",
            Self::Downward => "DOWNWARD",
            Self::Sideways => "SIDEWAYS",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    StrongUpward,
    Decline,
    Stable,
}

impl Suggestion {
    pub fn for_trend(trend: TrendLabel, mean_return: f64) -> Self {
        match trend {
            TrendLabel::Upward if mean_return > STRONG_UPWARD_THRESHOLD => Self::StrongUpward,
            TrendLabel::Downward => Self::Decline,
            _ => Self::Stable,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::StrongUpward => "The stock is showing a strong upward trend; consider further analysis for potential investment.",
            Self::Decline => "The stock is in decline; caution is advised.",
            Self::Stable => "The stock is relatively stable; monitor for changes.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Statistics and verdict for one price series.
///
/// Serializes the suggestion twice: as its code and as the sentence shown
/// in text output (`suggestion_text`).
#[derive(Debug, Clone, PartialEq)]
pub struct TrendAnalysis {
    pub trend: TrendLabel,
    pub mean_return: f64,
    /// Sample standard deviation of daily returns. `None` with a single return.
    pub volatility: Option<f64>,
    pub suggestion: Suggestion,
    /// Number of daily returns the statistics were computed from.
    pub observations: usize,
}

impl Serialize for TrendAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TrendAnalysis", 6)?;
        state.serialize_field("trend", &self.trend)?;
        state.serialize_field("mean_return", &self.mean_return)?;
        state.serialize_field("volatility", &self.volatility)?;
        state.serialize_field("suggestion", &self.suggestion)?;
        state.serialize_field("suggestion_text", self.suggestion.text())?;
        state.serialize_field("observations", &self.observations)?;
        state.end()
    }
}

/// Either an analysis or the explicit signal that there was nothing to analyze.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendOutcome {
    /// Fewer than two prices, so no daily return exists.
    NoData,
    Analyzed(TrendAnalysis),
}

impl TrendOutcome {
    pub fn analysis(&self) -> Option<&TrendAnalysis> {
        match self {
            Self::Analyzed(a) => Some(a),
            Self::NoData => None,
        }
    }
}

/// Period-over-period percentage changes. Undefined changes (0/0) are dropped.
pub fn daily_returns(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|w| (w[1] - w[0]) / w[0])
        .filter(|r| !r.is_nan())
        .collect()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator). Needs at least two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

pub fn classify(mean_return: f64) -> TrendLabel {
    if mean_return > UPWARD_THRESHOLD {
        TrendLabel::Upward
    } else if mean_return < DOWNWARD_THRESHOLD {
        TrendLabel::Downward
    } else {
        TrendLabel::Sideways
    }
}

/// Classifies an ascending sequence of closing prices.
pub fn analyze_closes(closes: &[f64]) -> TrendOutcome {
    let returns = daily_returns(closes);
    let Some(mean_return) = mean(&returns) else {
        return TrendOutcome::NoData;
    };
    let trend = classify(mean_return);
    TrendOutcome::Analyzed(TrendAnalysis {
        trend,
        mean_return,
        volatility: sample_std_dev(&returns),
        suggestion: Suggestion::for_trend(trend, mean_return),
        observations: returns.len(),
    })
}

pub fn analyze(series: &PriceSeries) -> TrendOutcome {
    analyze_closes(&series.closes())
}
