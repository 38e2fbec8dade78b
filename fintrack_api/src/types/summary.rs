//! The `quoteSummary` response and its company-level modules.

use serde::{Deserialize, Serialize};

use super::meta::Envelope;
use super::value::{raw_of, YahooValue};
use super::{
    BalanceSheetHistory, CashflowStatementHistory, IncomeStatementHistory, InstitutionOwnership,
    RecommendationTrend,
};

/// Top-level body of `/v10/finance/quoteSummary/{symbol}`.
#[derive(Serialize, Deserialize, Debug)]
pub struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: Envelope<QuoteSummaryResult>,
}

/// One symbol's summary. Only the modules that were requested are present.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub price: Option<Price>,
    pub asset_profile: Option<AssetProfile>,
    pub financial_data: Option<FinancialData>,
    pub income_statement_history: Option<IncomeStatementHistory>,
    pub balance_sheet_history: Option<BalanceSheetHistory>,
    pub cashflow_statement_history: Option<CashflowStatementHistory>,
    pub institution_ownership: Option<InstitutionOwnership>,
    pub recommendation_trend: Option<RecommendationTrend>,
}

/// The `price` module: naming, currency, and the latest market price.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub symbol: Option<String>,
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub regular_market_price: Option<YahooValue>,
    pub market_cap: Option<YahooValue>,
}

impl Price {
    /// Long name, falling back to the short name.
    pub fn display_name(&self) -> Option<&str> {
        self.long_name.as_deref().or(self.short_name.as_deref())
    }

    pub fn market_price(&self) -> Option<f64> {
        raw_of(&self.regular_market_price)
    }

    pub fn market_cap(&self) -> Option<f64> {
        raw_of(&self.market_cap)
    }
}

/// The `assetProfile` module.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub website: Option<String>,
    pub full_time_employees: Option<i64>,
    pub long_business_summary: Option<String>,
}

/// The `financialData` module. Carries the current price quoted to analysts.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub current_price: Option<YahooValue>,
    pub target_mean_price: Option<YahooValue>,
    pub recommendation_key: Option<String>,
    pub number_of_analyst_opinions: Option<YahooValue>,
    pub total_revenue: Option<YahooValue>,
    pub financial_currency: Option<String>,
}

impl FinancialData {
    pub fn current_price(&self) -> Option<f64> {
        raw_of(&self.current_price)
    }

    pub fn target_mean_price(&self) -> Option<f64> {
        raw_of(&self.target_mean_price)
    }
}
