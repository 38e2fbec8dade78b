//! Facade over the fundamentals API and the chart client.

use chrono::NaiveDate;
use fintrack_api::{Client, OptionsQuery, SummaryQuery};

use crate::config::Settings;
use crate::error::FinTrackError;
use crate::options::OptionChain;
use crate::section::Section;
use crate::snapshot::{CompanyProfile, Fundamentals, StockSnapshot};
use crate::yahoo::{PriceHistory, YahooClient};

/// Gathers everything one ticker needs into a [`StockSnapshot`].
///
/// Provider calls run one after the other. Profile and history are
/// required: a failure aborts the fetch. Statements, holders and analyst
/// data are secondary and degrade to [`Section::Failed`].
pub struct MarketData {
    api: Client,
    yahoo: YahooClient,
}

impl MarketData {
    pub fn new(settings: &Settings) -> Result<Self, FinTrackError> {
        let api = match settings.base_url.as_deref() {
            Some(url) => Client::with_options(url, settings.timeout())?,
            None => Client::with_timeout(settings.timeout())?,
        };
        Ok(Self::from_parts(api, YahooClient::new()?))
    }

    pub fn from_parts(api: Client, yahoo: YahooClient) -> Self {
        Self { api, yahoo }
    }

    pub async fn profile(&self, ticker: &str) -> Result<CompanyProfile, FinTrackError> {
        let summary = self
            .api
            .get_quote_summary(ticker, &SummaryQuery::profile())
            .await?;
        Ok(CompanyProfile::from_summary(ticker, &summary))
    }

    pub async fn history(&self, ticker: &str, period: &str) -> Result<PriceHistory, FinTrackError> {
        Ok(self.yahoo.history(ticker, period).await?)
    }

    /// History between two dates, both inclusive.
    pub async fn history_between(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceHistory, FinTrackError> {
        Ok(self.yahoo.history_between(ticker, start, end).await?)
    }

    /// Never fails: a failed request marks every section failed.
    pub async fn fundamentals(&self, ticker: &str) -> Fundamentals {
        match self
            .api
            .get_quote_summary(ticker, &SummaryQuery::fundamentals())
            .await
        {
            Ok(summary) => Fundamentals::from_summary(&summary),
            Err(e) => {
                tracing::warn!("Fundamentals for {} unavailable: {}", ticker, e);
                Fundamentals::failed(e)
            }
        }
    }

    /// The nearest expiration's option chain.
    pub async fn fetch_options(&self, ticker: &str) -> Section<OptionChain> {
        match self.api.get_options(ticker, &OptionsQuery::default()).await {
            Ok(result) => Section::from_option(OptionChain::from_result(result)),
            Err(e) => {
                tracing::warn!("Option chain for {} unavailable: {}", ticker, e);
                Section::failed(e)
            }
        }
    }

    pub async fn fetch_snapshot(
        &self,
        ticker: &str,
        period: &str,
    ) -> Result<StockSnapshot, FinTrackError> {
        tracing::info!("Fetching {} ({})", ticker, period);
        let profile = self.profile(ticker).await?;
        let history = self.history(ticker, period).await?;
        let fundamentals = self.fundamentals(ticker).await;
        Ok(StockSnapshot::assemble(
            ticker,
            period,
            profile,
            history,
            fundamentals,
        ))
    }
}
