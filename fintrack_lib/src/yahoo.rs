//! Yahoo Finance chart client for daily price history and dividends.
//!
//! Fundamentals come from `fintrack_api`; this module only covers the chart
//! endpoint that `yahoo_finance_api` already wraps.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use time::OffsetDateTime;

use crate::series::{Dividend, PriceBar, PriceSeries};

/// Errors from Yahoo Finance chart operations.
#[derive(Error, Debug)]
pub enum YahooError {
    #[error("Rate limited by Yahoo Finance (HTTP 429)")]
    RateLimited,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error(transparent)]
    Upstream(#[from] yahoo_finance_api::YahooError),
}

/// Convert chrono::NaiveDate to time::OffsetDateTime at UTC midnight.
pub fn date_to_offset_datetime(date: NaiveDate) -> Result<OffsetDateTime, YahooError> {
    let timestamp = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| YahooError::InvalidDate(date.to_string()))?
        .and_utc()
        .timestamp();
    OffsetDateTime::from_unix_timestamp(timestamp)
        .map_err(|_| YahooError::InvalidDate(date.to_string()))
}

/// Request bounds for an inclusive date range: `start` midnight to the
/// midnight after `end`.
pub fn range_bounds(
    start: NaiveDate,
    end: NaiveDate,
) -> Result<(OffsetDateTime, OffsetDateTime), YahooError> {
    if end < start {
        return Err(YahooError::InvalidDate(format!("{} is before {}", end, start)));
    }
    let after_end = end
        .succ_opt()
        .ok_or_else(|| YahooError::InvalidDate(end.to_string()))?;
    Ok((
        date_to_offset_datetime(start)?,
        date_to_offset_datetime(after_end)?,
    ))
}

/// Convert a unix timestamp from the chart endpoint to a UTC datetime.
pub fn timestamp_to_utc(timestamp: i64) -> Result<DateTime<Utc>, YahooError> {
    DateTime::from_timestamp(timestamp, 0)
        .ok_or_else(|| YahooError::InvalidDate(timestamp.to_string()))
}

/// Daily bars plus the dividends paid in the same range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    pub series: PriceSeries,
    pub dividends: Vec<Dividend>,
}

fn bar_from_quote(q: &yahoo_finance_api::Quote) -> Result<PriceBar, YahooError> {
    Ok(PriceBar {
        timestamp: timestamp_to_utc(q.timestamp as i64)?,
        open: q.open,
        high: q.high,
        low: q.low,
        close: q.close,
        adj_close: q.adjclose,
        volume: q.volume,
    })
}

fn history_from_response(
    ticker: &str,
    response: &yahoo_finance_api::YResponse,
) -> Result<PriceHistory, YahooError> {
    use yahoo_finance_api::YahooError as Upstream;

    let quotes = match response.quotes() {
        Ok(quotes) => quotes,
        // An empty chart (delisted ticker, range with no sessions) is not a failure.
        Err(e @ (Upstream::NoQuotes | Upstream::NoResult)) => {
            tracing::debug!("{}: no quotes in chart response: {}", ticker, e);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!("{}: unusable chart response: {}", ticker, e);
            return Err(YahooError::Upstream(e));
        }
    };
    let bars = quotes
        .iter()
        .map(bar_from_quote)
        .collect::<Result<Vec<_>, _>>()?;

    let mut dividends = match response.dividends() {
        Ok(divs) => divs
            .iter()
            .map(|d| {
                Ok(Dividend {
                    date: timestamp_to_utc(d.date as i64)?.date_naive(),
                    amount: d.amount,
                })
            })
            .collect::<Result<Vec<_>, YahooError>>()?,
        Err(e) => {
            tracing::debug!("{}: no dividend events: {}", ticker, e);
            Vec::new()
        }
    };
    dividends.sort_by_key(|d| d.date);

    Ok(PriceHistory {
        series: PriceSeries::normalized(bars),
        dividends,
    })
}

fn map_upstream(ticker: &str, e: yahoo_finance_api::YahooError) -> YahooError {
    let text = e.to_string();
    tracing::warn!("Chart request for {} failed: {}", ticker, text);
    if text.contains("429") {
        YahooError::RateLimited
    } else {
        YahooError::Upstream(e)
    }
}

/// Yahoo Finance chart client.
pub struct YahooClient {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooClient {
    /// Create a new YahooClient with default configuration.
    pub fn new() -> Result<Self, YahooError> {
        Ok(Self {
            connector: yahoo_finance_api::YahooConnector::new()?,
        })
    }

    /// Daily history for a period code such as `1y` or `ytd`.
    pub async fn history(&self, ticker: &str, period: &str) -> Result<PriceHistory, YahooError> {
        tracing::debug!("Fetching {} daily history for {}", period, ticker);
        let response = self
            .connector
            .get_quote_range(ticker, "1d", period)
            .await
            .map_err(|e| map_upstream(ticker, e))?;
        history_from_response(ticker, &response)
    }

    /// Daily history between two dates, both inclusive.
    pub async fn history_between(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceHistory, YahooError> {
        tracing::debug!("Fetching {} daily history from {} to {}", ticker, start, end);
        let (start_odt, end_odt) = range_bounds(start, end)?;
        let response = self
            .connector
            .get_quote_history(ticker, start_odt, end_odt)
            .await
            .map_err(|e| map_upstream(ticker, e))?;
        history_from_response(ticker, &response)
    }
}
