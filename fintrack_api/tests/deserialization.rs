use chrono::NaiveDate;
use fintrack_api::types::{OptionChainResponse, QuoteSummaryResponse};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_profile() {
    let json = load_fixture("quote_summary_profile.json");
    let resp: QuoteSummaryResponse = serde_json::from_str(&json).unwrap();
    let result = resp.quote_summary.into_first().unwrap();

    let price = result.price.unwrap();
    assert_eq!(price.display_name(), Some("Apple Inc."));
    assert_eq!(price.currency.as_deref(), Some("USD"));
    assert_eq!(price.market_price(), Some(189.84));
    assert_eq!(price.market_cap(), Some(2_950_000_000_000.0));

    let profile = result.asset_profile.unwrap();
    assert_eq!(profile.sector.as_deref(), Some("Technology"));
    assert_eq!(profile.industry.as_deref(), Some("Consumer Electronics"));
    assert_eq!(profile.full_time_employees, Some(161000));

    let financial = result.financial_data.unwrap();
    assert_eq!(financial.current_price(), Some(189.84));
    assert_eq!(financial.recommendation_key.as_deref(), Some("buy"));

    assert!(result.income_statement_history.is_none());
}

#[test]
fn deserialize_fundamentals() {
    let json = load_fixture("quote_summary_fundamentals.json");
    let resp: QuoteSummaryResponse = serde_json::from_str(&json).unwrap();
    let result = resp.quote_summary.into_first().unwrap();

    let income = result.income_statement_history.unwrap().income_statement_history;
    assert_eq!(income.len(), 2);
    assert_eq!(income[0].end_date.date(), NaiveDate::from_ymd_opt(2023, 9, 30));
    assert_eq!(income[0].total_revenue(), Some(383_285_000_000.0));
    assert_eq!(income[1].net_income(), Some(99_803_000_000.0));

    let balance = result.balance_sheet_history.unwrap().balance_sheet_statements;
    assert_eq!(balance[0].total_liabilities(), Some(290_437_000_000.0));
    assert_eq!(balance[1].total_assets(), None);
    assert_eq!(balance[1].cash(), None);

    let cashflow = result.cashflow_statement_history.unwrap().cashflow_statements;
    assert_eq!(cashflow[0].free_cash_flow(), Some(99_584_000_000.0));

    let holders = result.institution_ownership.unwrap().ownership_list;
    assert_eq!(holders.len(), 6);
    assert_eq!(holders[0].organization, "Vanguard Group Inc");
    assert_eq!(holders[0].shares(), Some(1_300_000_000.0));
    assert_eq!(holders[0].pct_held(), Some(0.0834));

    let trend = result.recommendation_trend.unwrap().trend;
    assert_eq!(trend.len(), 4);
    assert_eq!(trend[0].period, "0m");
    assert_eq!(trend[0].total(), 38);
}

#[test]
fn deserialize_not_found_envelope() {
    let json = load_fixture("quote_summary_not_found.json");
    let resp: QuoteSummaryResponse = serde_json::from_str(&json).unwrap();
    let err = resp.quote_summary.into_first().unwrap_err();
    assert!(matches!(err, fintrack_api::Error::Upstream { ref code, .. } if code == "Not Found"));
}

#[test]
fn deserialize_empty_result_list() {
    let json = r#"{"quoteSummary":{"result":[],"error":null}}"#;
    let resp: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
    let err = resp.quote_summary.into_first().unwrap_err();
    assert!(matches!(err, fintrack_api::Error::EmptyResult));
}

#[test]
fn deserialize_options() {
    let json = load_fixture("options.json");
    let resp: OptionChainResponse = serde_json::from_str(&json).unwrap();
    let chain = resp.option_chain.into_first().unwrap();

    assert_eq!(chain.underlying_symbol, "AAPL");
    assert_eq!(chain.expiration_dates.len(), 2);
    let set = &chain.options[0];
    assert_eq!(set.calls.len(), 2);
    assert_eq!(set.puts.len(), 1);
    assert_eq!(set.calls[0].strike, 150.0);
    assert_eq!(set.calls[0].last_price, 40.1);
    assert!(set.calls[0].in_the_money);
    assert_eq!(set.calls[1].volume, None);
    assert_eq!(set.puts[0].open_interest, Some(3400));
}
