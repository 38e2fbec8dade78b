//! Statement tables built from the `quoteSummary` statement modules.
//!
//! A table has one column per reporting period (newest first, as the
//! provider returns them) and one row per line item.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{
    BalanceSheet, BalanceSheetHistory, CashflowStatement, CashflowStatementHistory,
    IncomeStatement, IncomeStatementHistory,
};

pub const TOTAL_REVENUE: &str = "Total Revenue";
pub const GROSS_PROFIT: &str = "Gross Profit";
pub const OPERATING_INCOME: &str = "Operating Income";
pub const NET_INCOME: &str = "Net Income";
pub const TOTAL_ASSETS: &str = "Total Assets";
pub const TOTAL_LIABILITIES: &str = "Total Liabilities";
pub const STOCKHOLDERS_EQUITY: &str = "Stockholders Equity";
pub const CASH: &str = "Cash";
pub const OPERATING_CASH_FLOW: &str = "Operating Cash Flow";
pub const CAPITAL_EXPENDITURES: &str = "Capital Expenditures";
pub const FREE_CASH_FLOW: &str = "Free Cash Flow";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementRow {
    pub label: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementTable {
    pub title: String,
    pub periods: Vec<Option<NaiveDate>>,
    pub rows: Vec<StatementRow>,
}

impl StatementTable {
    /// True when there are no periods or no row has a single value.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
            || self
                .rows
                .iter()
                .all(|r| r.values.iter().all(Option::is_none))
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> StatementTable {
        StatementTable {
            title: self.title.clone(),
            periods: self.periods.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Only the named rows, in the order asked for. Unknown labels are skipped.
    pub fn select(&self, labels: &[&str]) -> StatementTable {
        StatementTable {
            title: self.title.clone(),
            periods: self.periods.clone(),
            rows: labels
                .iter()
                .filter_map(|label| self.row(label).cloned())
                .collect(),
        }
    }

    pub fn row(&self, label: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

type Extractor<S> = fn(&S) -> Option<f64>;

fn build_table<S>(
    title: &str,
    statements: &[S],
    end_date: fn(&S) -> Option<NaiveDate>,
    lines: &[(&str, Extractor<S>)],
) -> StatementTable {
    StatementTable {
        title: title.to_string(),
        periods: statements.iter().map(end_date).collect(),
        rows: lines
            .iter()
            .map(|(label, extract)| StatementRow {
                label: label.to_string(),
                values: statements.iter().map(extract).collect(),
            })
            .collect(),
    }
}

pub fn income_statement_table(history: &IncomeStatementHistory) -> StatementTable {
    build_table(
        "Income Statement",
        &history.income_statement_history,
        |s: &IncomeStatement| s.end_date.date(),
        &[
            (TOTAL_REVENUE, IncomeStatement::total_revenue),
            (GROSS_PROFIT, IncomeStatement::gross_profit),
            (OPERATING_INCOME, IncomeStatement::operating_income),
            (NET_INCOME, IncomeStatement::net_income),
        ],
    )
}

pub fn balance_sheet_table(history: &BalanceSheetHistory) -> StatementTable {
    build_table(
        "Balance Sheet",
        &history.balance_sheet_statements,
        |s: &BalanceSheet| s.end_date.date(),
        &[
            (TOTAL_ASSETS, BalanceSheet::total_assets),
            (TOTAL_LIABILITIES, BalanceSheet::total_liabilities),
            (STOCKHOLDERS_EQUITY, BalanceSheet::stockholder_equity),
            (CASH, BalanceSheet::cash),
        ],
    )
}

pub fn cash_flow_table(history: &CashflowStatementHistory) -> StatementTable {
    build_table(
        "Cash Flow",
        &history.cashflow_statements,
        |s: &CashflowStatement| s.end_date.date(),
        &[
            (OPERATING_CASH_FLOW, CashflowStatement::operating_cash_flow),
            (CAPITAL_EXPENDITURES, CashflowStatement::capital_expenditures),
            (FREE_CASH_FLOW, CashflowStatement::free_cash_flow),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income() -> IncomeStatementHistory {
        serde_json::from_value(serde_json::json!({
            "incomeStatementHistory": [
                {
                    "endDate": {"raw": 1696032000, "fmt": "2023-09-30"},
                    "totalRevenue": {"raw": 383285000000.0},
                    "netIncome": {"raw": 96995000000.0}
                },
                {
                    "endDate": {"raw": 1663977600, "fmt": "2022-09-24"},
                    "totalRevenue": {"raw": 394328000000.0},
                    "netIncome": {}
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn income_table_columns_follow_periods() {
        let table = income_statement_table(&income());
        assert_eq!(table.title, "Income Statement");
        assert_eq!(
            table.periods,
            vec![
                NaiveDate::from_ymd_opt(2023, 9, 30),
                NaiveDate::from_ymd_opt(2022, 9, 24)
            ]
        );
        let net = table.row(NET_INCOME).unwrap();
        assert_eq!(net.values, vec![Some(96995000000.0), None]);
        assert_eq!(table.rows.len(), 4);
    }

    #[test]
    fn select_keeps_requested_order() {
        let table = income_statement_table(&income()).select(&[NET_INCOME, "Nope", TOTAL_REVENUE]);
        let labels: Vec<&str> = table.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec![NET_INCOME, TOTAL_REVENUE]);
    }

    #[test]
    fn head_truncates_rows() {
        assert_eq!(income_statement_table(&income()).head(2).rows.len(), 2);
        assert_eq!(income_statement_table(&income()).head(10).rows.len(), 4);
    }

    #[test]
    fn empty_history_is_empty_table() {
        let table = cash_flow_table(&CashflowStatementHistory::default());
        assert!(table.is_empty());
        assert_eq!(table.rows.len(), 3);
        assert!(!income_statement_table(&income()).is_empty());
    }
}
