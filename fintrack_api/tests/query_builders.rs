use chrono::NaiveDate;
use fintrack_api::{OptionsQuery, Query, SummaryModule, SummaryQuery};
use url::Url;

fn base() -> Url {
    Url::parse("https://query2.finance.yahoo.com/v10/finance/quoteSummary/AAPL").unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs().into_owned().collect()
}

#[test]
fn empty_summary_query_adds_nothing() {
    let url = SummaryQuery::default().add_to_url(&base());
    assert!(url.query().is_none());
}

#[test]
fn profile_preset_modules() {
    let url = SummaryQuery::profile().add_to_url(&base());
    assert_eq!(
        pairs(&url),
        vec![("modules".to_string(), "price,assetProfile,financialData".to_string())]
    );
}

#[test]
fn fundamentals_preset_modules() {
    let url = SummaryQuery::fundamentals().add_to_url(&base());
    assert_eq!(
        pairs(&url)[0].1,
        "incomeStatementHistory,balanceSheetHistory,cashflowStatementHistory,institutionOwnership,recommendationTrend"
    );
}

#[test]
fn duplicate_modules_are_ignored() {
    let query = SummaryQuery::default()
        .with_module(SummaryModule::Price)
        .with_module(SummaryModule::RecommendationTrend)
        .with_module(SummaryModule::Price);
    assert_eq!(query.modules.len(), 2);
    let url = query.add_to_url(&base());
    assert_eq!(pairs(&url)[0].1, "price,recommendationTrend");
}

#[test]
fn module_display_matches_wire_name() {
    assert_eq!(SummaryModule::InstitutionOwnership.to_string(), "institutionOwnership");
    assert_eq!(SummaryModule::CashflowStatementHistory.to_string(), "cashflowStatementHistory");
}

#[test]
fn options_query_without_expiration() {
    let url = OptionsQuery::default().add_to_url(&base());
    assert!(url.query().is_none());
}

#[test]
fn options_query_with_expiration_date() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    let url = OptionsQuery::default()
        .with_expiration_date(date)
        .add_to_url(&base());
    assert_eq!(pairs(&url), vec![("date".to_string(), "1718323200".to_string())]);
}
