//! Query builder for the `quoteSummary` endpoint.

use std::fmt;

use url::Url;

use super::common::Query;

/// A `quoteSummary` module. Each one maps to a field of
/// [`QuoteSummaryResult`](crate::types::QuoteSummaryResult).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryModule {
    Price,
    AssetProfile,
    FinancialData,
    IncomeStatementHistory,
    BalanceSheetHistory,
    CashflowStatementHistory,
    InstitutionOwnership,
    RecommendationTrend,
}

impl SummaryModule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::AssetProfile => "assetProfile",
            Self::FinancialData => "financialData",
            Self::IncomeStatementHistory => "incomeStatementHistory",
            Self::BalanceSheetHistory => "balanceSheetHistory",
            Self::CashflowStatementHistory => "cashflowStatementHistory",
            Self::InstitutionOwnership => "institutionOwnership",
            Self::RecommendationTrend => "recommendationTrend",
        }
    }
}

impl fmt::Display for SummaryModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selects which modules a `quoteSummary` request returns.
#[derive(Clone, Debug, Default)]
pub struct SummaryQuery {
    pub modules: Vec<SummaryModule>,
}

impl SummaryQuery {
    /// Company name, sector, current price, and market cap.
    pub fn profile() -> Self {
        Self::default()
            .with_module(SummaryModule::Price)
            .with_module(SummaryModule::AssetProfile)
            .with_module(SummaryModule::FinancialData)
    }

    /// Statements, institutional holders, and analyst recommendations.
    pub fn fundamentals() -> Self {
        Self::default()
            .with_module(SummaryModule::IncomeStatementHistory)
            .with_module(SummaryModule::BalanceSheetHistory)
            .with_module(SummaryModule::CashflowStatementHistory)
            .with_module(SummaryModule::InstitutionOwnership)
            .with_module(SummaryModule::RecommendationTrend)
    }

    /// Adds a module. Duplicates are ignored.
    pub fn with_module(mut self, module: SummaryModule) -> Self {
        if !self.modules.contains(&module) {
            self.modules.push(module);
        }
        self
    }
}

impl Query for SummaryQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.modules.is_empty() {
            let modules = self
                .modules
                .iter()
                .map(SummaryModule::as_str)
                .collect::<Vec<_>>()
                .join(",");
            url.query_pairs_mut().append_pair("modules", &modules);
        }
        url
    }
}
