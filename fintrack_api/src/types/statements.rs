//! Annual financial statement modules.
//!
//! Yahoo trimmed most balance sheet and cash flow fields from `quoteSummary`
//! in 2023, so every line item is optional.

use serde::{Deserialize, Serialize};

use super::value::{raw_of, YahooDate, YahooValue};

/// The `incomeStatementHistory` module.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementHistory {
    #[serde(default)]
    pub income_statement_history: Vec<IncomeStatement>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    pub end_date: YahooDate,
    pub total_revenue: Option<YahooValue>,
    pub gross_profit: Option<YahooValue>,
    pub operating_income: Option<YahooValue>,
    pub net_income: Option<YahooValue>,
}

impl IncomeStatement {
    pub fn total_revenue(&self) -> Option<f64> {
        raw_of(&self.total_revenue)
    }

    pub fn gross_profit(&self) -> Option<f64> {
        raw_of(&self.gross_profit)
    }

    pub fn operating_income(&self) -> Option<f64> {
        raw_of(&self.operating_income)
    }

    pub fn net_income(&self) -> Option<f64> {
        raw_of(&self.net_income)
    }
}

/// The `balanceSheetHistory` module.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetHistory {
    #[serde(default)]
    pub balance_sheet_statements: Vec<BalanceSheet>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    pub end_date: YahooDate,
    pub total_assets: Option<YahooValue>,
    pub total_liab: Option<YahooValue>,
    pub total_stockholder_equity: Option<YahooValue>,
    pub cash: Option<YahooValue>,
}

impl BalanceSheet {
    pub fn total_assets(&self) -> Option<f64> {
        raw_of(&self.total_assets)
    }

    pub fn total_liabilities(&self) -> Option<f64> {
        raw_of(&self.total_liab)
    }

    pub fn stockholder_equity(&self) -> Option<f64> {
        raw_of(&self.total_stockholder_equity)
    }

    pub fn cash(&self) -> Option<f64> {
        raw_of(&self.cash)
    }
}

/// The `cashflowStatementHistory` module.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CashflowStatementHistory {
    #[serde(default)]
    pub cashflow_statements: Vec<CashflowStatement>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CashflowStatement {
    pub end_date: YahooDate,
    pub total_cash_from_operating_activities: Option<YahooValue>,
    pub capital_expenditures: Option<YahooValue>,
    pub net_income: Option<YahooValue>,
}

impl CashflowStatement {
    pub fn operating_cash_flow(&self) -> Option<f64> {
        raw_of(&self.total_cash_from_operating_activities)
    }

    /// Reported as a negative number.
    pub fn capital_expenditures(&self) -> Option<f64> {
        raw_of(&self.capital_expenditures)
    }

    /// Operating cash flow net of capital expenditures.
    pub fn free_cash_flow(&self) -> Option<f64> {
        Some(self.operating_cash_flow()? + self.capital_expenditures()?)
    }
}
