//! Yahoo's formatted number and date wrappers.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A number as Yahoo reports it: `{"raw": 1.5, "fmt": "1.50", "longFmt": "1.50"}`.
///
/// Missing values arrive as `{}`, so every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YahooValue {
    pub raw: Option<f64>,
    pub fmt: Option<String>,
    pub long_fmt: Option<String>,
}

impl YahooValue {
    pub fn raw(&self) -> Option<f64> {
        self.raw.filter(|v| v.is_finite())
    }
}

/// A date as Yahoo reports it: `{"raw": 1696032000, "fmt": "2023-09-30"}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct YahooDate {
    pub raw: Option<i64>,
    pub fmt: Option<String>,
}

impl YahooDate {
    /// Calendar date in UTC, taken from the unix timestamp or, failing that,
    /// the formatted `YYYY-MM-DD` string.
    pub fn date(&self) -> Option<NaiveDate> {
        self.raw
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .map(|dt| dt.date_naive())
            .or_else(|| {
                self.fmt
                    .as_deref()
                    .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            })
    }
}

/// Extracts the raw number from an optional wrapper.
pub(crate) fn raw_of(value: &Option<YahooValue>) -> Option<f64> {
    value.as_ref().and_then(YahooValue::raw)
}
