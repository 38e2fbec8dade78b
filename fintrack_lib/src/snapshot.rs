//! Everything fetched for one ticker, as plain data.

use serde::Serialize;

use crate::financials::{self, StatementTable};
use crate::ownership::{self, Holder};
use crate::section::Section;
use crate::series::{Dividend, PriceSeries};
use crate::trend::{self, TrendOutcome};
use crate::types::{QuoteSummaryResult, RecommendationPeriod};
use crate::yahoo::PriceHistory;

/// Company information. Any field may be missing for thinly covered tickers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyProfile {
    pub symbol: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub employees: Option<i64>,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub target_mean_price: Option<f64>,
    pub recommendation_key: Option<String>,
    pub summary: Option<String>,
}

impl CompanyProfile {
    /// Reads the `price`, `assetProfile` and `financialData` modules. The
    /// analyst-quoted current price wins over the regular market price.
    pub fn from_summary(symbol: &str, summary: &QuoteSummaryResult) -> Self {
        let price = summary.price.as_ref();
        let profile = summary.asset_profile.as_ref();
        let financial = summary.financial_data.as_ref();
        Self {
            symbol: price
                .and_then(|p| p.symbol.clone())
                .unwrap_or_else(|| symbol.to_string()),
            name: price.and_then(|p| p.display_name()).map(str::to_string),
            sector: profile.and_then(|p| p.sector.clone()),
            industry: profile.and_then(|p| p.industry.clone()),
            country: profile.and_then(|p| p.country.clone()),
            website: profile.and_then(|p| p.website.clone()),
            employees: profile.and_then(|p| p.full_time_employees),
            currency: price
                .and_then(|p| p.currency.clone())
                .or_else(|| financial.and_then(|f| f.financial_currency.clone())),
            exchange: price.and_then(|p| p.exchange_name.clone()),
            current_price: financial
                .and_then(|f| f.current_price())
                .or_else(|| price.and_then(|p| p.market_price())),
            market_cap: price.and_then(|p| p.market_cap()),
            target_mean_price: financial.and_then(|f| f.target_mean_price()),
            recommendation_key: financial.and_then(|f| f.recommendation_key.clone()),
            summary: profile.and_then(|p| p.long_business_summary.clone()),
        }
    }
}

/// Statements, holders and analyst trend from one `quoteSummary` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fundamentals {
    pub income_statement: Section<StatementTable>,
    pub balance_sheet: Section<StatementTable>,
    pub cash_flow: Section<StatementTable>,
    pub holders: Section<Vec<Holder>>,
    pub recommendations: Section<Vec<RecommendationPeriod>>,
}

fn table_section(table: Option<StatementTable>) -> Section<StatementTable> {
    Section::from_option(table.filter(|t| !t.is_empty()))
}

impl Fundamentals {
    pub fn from_summary(summary: &QuoteSummaryResult) -> Self {
        Self {
            income_statement: table_section(
                summary
                    .income_statement_history
                    .as_ref()
                    .map(financials::income_statement_table),
            ),
            balance_sheet: table_section(
                summary
                    .balance_sheet_history
                    .as_ref()
                    .map(financials::balance_sheet_table),
            ),
            cash_flow: table_section(
                summary
                    .cashflow_statement_history
                    .as_ref()
                    .map(financials::cash_flow_table),
            ),
            holders: Section::from_vec(
                summary
                    .institution_ownership
                    .as_ref()
                    .map(ownership::holders_from)
                    .unwrap_or_default(),
            ),
            recommendations: Section::from_vec(
                summary
                    .recommendation_trend
                    .as_ref()
                    .map(|t| t.trend.clone())
                    .unwrap_or_default(),
            ),
        }
    }

    /// Every section marked failed with the same cause.
    pub fn failed(reason: impl ToString) -> Self {
        let reason = reason.to_string();
        Self {
            income_statement: Section::Failed(reason.clone()),
            balance_sheet: Section::Failed(reason.clone()),
            cash_flow: Section::Failed(reason.clone()),
            holders: Section::Failed(reason.clone()),
            recommendations: Section::Failed(reason),
        }
    }
}

/// One ticker's data for one period. Owned by the command that fetched it
/// and passed by reference to each rendering and analysis step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSnapshot {
    pub ticker: String,
    pub period: String,
    pub profile: CompanyProfile,
    pub history: PriceSeries,
    pub dividends: Vec<Dividend>,
    pub income_statement: Section<StatementTable>,
    pub balance_sheet: Section<StatementTable>,
    pub cash_flow: Section<StatementTable>,
    pub holders: Section<Vec<Holder>>,
    pub recommendations: Section<Vec<RecommendationPeriod>>,
}

impl StockSnapshot {
    pub fn assemble(
        ticker: &str,
        period: &str,
        profile: CompanyProfile,
        history: PriceHistory,
        fundamentals: Fundamentals,
    ) -> Self {
        Self {
            ticker: ticker.to_string(),
            period: period.to_string(),
            profile,
            history: history.series,
            dividends: history.dividends,
            income_statement: fundamentals.income_statement,
            balance_sheet: fundamentals.balance_sheet,
            cash_flow: fundamentals.cash_flow,
            holders: fundamentals.holders,
            recommendations: fundamentals.recommendations,
        }
    }

    pub fn analysis(&self) -> TrendOutcome {
        trend::analyze(&self.history)
    }

    /// The last `n` dividends.
    pub fn recent_dividends(&self, n: usize) -> &[Dividend] {
        &self.dividends[self.dividends.len().saturating_sub(n)..]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::trend::TrendLabel;

    fn summary(value: serde_json::Value) -> QuoteSummaryResult {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn profile_prefers_financial_data_price() {
        let s = summary(serde_json::json!({
            "price": {"symbol": "AAPL", "shortName": "Apple", "regularMarketPrice": {"raw": 190.0}},
            "financialData": {"currentPrice": {"raw": 189.84}}
        }));
        let p = CompanyProfile::from_summary("aapl", &s);
        assert_eq!(p.symbol, "AAPL");
        assert_eq!(p.name.as_deref(), Some("Apple"));
        assert_eq!(p.current_price, Some(189.84));
        assert!(p.sector.is_none());
    }

    #[test]
    fn profile_falls_back_to_market_price() {
        let s = summary(serde_json::json!({
            "price": {"regularMarketPrice": {"raw": 190.0}}
        }));
        let p = CompanyProfile::from_summary("XYZ", &s);
        assert_eq!(p.symbol, "XYZ");
        assert_eq!(p.current_price, Some(190.0));
    }

    #[test]
    fn missing_modules_are_empty_not_failed() {
        let f = Fundamentals::from_summary(&QuoteSummaryResult::default());
        assert_eq!(f.income_statement, Section::Empty);
        assert_eq!(f.holders, Section::Empty);
        assert_eq!(f.recommendations, Section::Empty);
    }

    #[test]
    fn failed_marks_every_section() {
        let f = Fundamentals::failed("HTTP 500");
        assert!(matches!(&f.cash_flow, Section::Failed(r) if r == "HTTP 500"));
        assert!(matches!(&f.recommendations, Section::Failed(r) if r == "HTTP 500"));
    }

    #[test]
    fn snapshot_analysis_uses_history() {
        let series = PriceSeries::from_closes(
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            &[100.0, 100.3, 100.6, 100.9, 101.2],
        );
        let snap = StockSnapshot::assemble(
            "AAPL",
            "1y",
            CompanyProfile::default(),
            PriceHistory {
                series,
                dividends: vec![],
            },
            Fundamentals::failed("offline"),
        );
        assert_eq!(snap.analysis().analysis().unwrap().trend, TrendLabel::Upward);
        assert!(snap.recent_dividends(5).is_empty());
    }
}
