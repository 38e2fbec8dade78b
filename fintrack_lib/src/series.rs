//! Daily price bars and dividend events.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FinTrackError;

/// One OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub adj_close: f64,
    pub volume: u64,
}

impl PriceBar {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// A chronologically ascending series of bars with no duplicate timestamps.
///
/// Returns and trends computed from a series depend on its order, so every
/// constructor guarantees it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Builds a series from bars that must already be strictly ascending.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, FinTrackError> {
        if let Some(w) = bars.windows(2).find(|w| w[1].timestamp <= w[0].timestamp) {
            return Err(FinTrackError::InvalidInput(format!(
                "price series is not strictly ascending at {}",
                w[1].timestamp
            )));
        }
        Ok(Self { bars })
    }

    /// Builds a series from provider bars: drops bars without a finite close,
    /// sorts by timestamp, and keeps the last bar for a repeated timestamp.
    pub fn normalized(mut bars: Vec<PriceBar>) -> Self {
        bars.retain(|b| b.close.is_finite());
        bars.sort_by_key(|b| b.timestamp);
        let mut out: Vec<PriceBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match out.last_mut() {
                Some(last) if last.timestamp == bar.timestamp => *last = bar,
                _ => out.push(bar),
            }
        }
        Self { bars: out }
    }

    /// Daily bars at UTC midnight starting on `start`, one per close, with
    /// open/high/low equal to the close and zero volume.
    pub fn from_closes(start: NaiveDate, closes: &[f64]) -> Self {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                timestamp: (start + Duration::days(i as i64))
                    .and_hms_opt(0, 0, 0)
                    .unwrap_or_default()
                    .and_utc(),
                open: close,
                high: close,
                low: close,
                close,
                adj_close: close,
                volume: 0,
            })
            .collect();
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// The last `n` bars (all of them when the series is shorter).
    pub fn tail(&self, n: usize) -> &[PriceBar] {
        &self.bars[self.bars.len().saturating_sub(n)..]
    }
}

/// A cash dividend paid per share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    pub date: NaiveDate,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(day: u32, close: f64) -> PriceBar {
        PriceBar {
            timestamp: NaiveDate::from_ymd_opt(2024, 1, day)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap()
                .and_utc(),
            open: close,
            high: close,
            low: close,
            close,
            adj_close: close,
            volume: 1_000,
        }
    }

    #[test]
    fn new_accepts_ascending() {
        let s = PriceSeries::new(vec![bar(2, 1.0), bar(3, 2.0), bar(4, 3.0)]).unwrap();
        assert_eq!(s.closes(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn new_rejects_descending_and_duplicates() {
        assert!(PriceSeries::new(vec![bar(3, 1.0), bar(2, 2.0)]).is_err());
        assert!(PriceSeries::new(vec![bar(2, 1.0), bar(2, 2.0)]).is_err());
    }

    #[test]
    fn new_accepts_empty_and_single() {
        assert!(PriceSeries::new(vec![]).unwrap().is_empty());
        assert_eq!(PriceSeries::new(vec![bar(2, 1.0)]).unwrap().len(), 1);
    }

    #[test]
    fn normalized_sorts_dedups_and_drops_nan() {
        let s = PriceSeries::normalized(vec![
            bar(4, 4.0),
            bar(2, 2.0),
            bar(3, f64::NAN),
            bar(4, 4.5),
        ]);
        assert_eq!(s.closes(), vec![2.0, 4.5]);
    }

    #[test]
    fn tail_shorter_than_series() {
        let s = PriceSeries::from_closes(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.tail(2).len(), 2);
        assert_eq!(s.tail(2)[0].close, 2.0);
        assert_eq!(s.tail(10).len(), 3);
    }

    #[test]
    fn from_closes_one_bar_per_day() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let s = PriceSeries::from_closes(start, &[1.0, 2.0, 3.0]);
        let dates: Vec<NaiveDate> = s.bars().iter().map(PriceBar::date).collect();
        assert_eq!(
            dates,
            vec![
                start,
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ]
        );
        assert!(PriceSeries::new(s.bars().to_vec()).is_ok());
    }
}
