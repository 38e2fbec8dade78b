use fintrack_lib::financials::{FREE_CASH_FLOW, NET_INCOME, TOTAL_ASSETS};
use fintrack_lib::fintrack_api::Client;
use fintrack_lib::ownership::top_holders;
use fintrack_lib::recommendations;
use fintrack_lib::yahoo::YahooClient;
use fintrack_lib::{MarketData, Section};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn setup(server: &MockServer) -> MarketData {
    Mock::given(method("GET"))
        .and(path("/v1/test/getcrumb"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Xy3crumb"))
        .mount(server)
        .await;
    let api = Client::with_base_url(&server.uri()).unwrap();
    MarketData::from_parts(api, YahooClient::new().unwrap())
}

#[tokio::test]
async fn profile_reads_company_modules() {
    let server = MockServer::start().await;
    let data = setup(&server).await;
    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/AAPL"))
        .and(query_param("modules", "price,assetProfile,financialData"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("quote_summary_profile.json")),
        )
        .mount(&server)
        .await;

    let profile = data.profile("AAPL").await.unwrap();
    assert_eq!(profile.name.as_deref(), Some("Apple Inc."));
    assert_eq!(profile.sector.as_deref(), Some("Technology"));
    assert_eq!(profile.current_price, Some(189.84));
    assert_eq!(profile.market_cap, Some(2.95e12));
}

#[tokio::test]
async fn profile_failure_is_an_error() {
    let server = MockServer::start().await;
    let data = setup(&server).await;
    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/ZZZZ"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = data.profile("ZZZZ").await.unwrap_err();
    assert!(err.to_string().starts_with("API error"));
}

#[tokio::test]
async fn fundamentals_fill_every_section() {
    let server = MockServer::start().await;
    let data = setup(&server).await;
    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/AAPL"))
        .and(query_param(
            "modules",
            "incomeStatementHistory,balanceSheetHistory,cashflowStatementHistory,institutionOwnership,recommendationTrend",
        ))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("quote_summary_fundamentals.json")),
        )
        .mount(&server)
        .await;

    let f = data.fundamentals("AAPL").await;

    let income = f.income_statement.available().unwrap();
    assert_eq!(
        income.row(NET_INCOME).unwrap().values,
        vec![Some(96995000000.0), Some(99803000000.0)]
    );

    let balance = f.balance_sheet.available().unwrap();
    assert_eq!(balance.row(TOTAL_ASSETS).unwrap().values[1], None);

    let cash = f.cash_flow.available().unwrap();
    assert_eq!(cash.row(FREE_CASH_FLOW).unwrap().values, vec![Some(99584000000.0)]);

    let holders = f.holders.available().unwrap();
    assert_eq!(holders.len(), 6);
    let top = top_holders(holders, 5);
    assert_eq!(top.len(), 5);
    let sum: f64 = top.iter().map(|h| h.pct_of_top).sum();
    assert!((sum - 100.0).abs() < 1e-9);

    let periods = f.recommendations.available().unwrap();
    let latest = recommendations::latest(periods).unwrap();
    assert_eq!(latest.period, "0m");
    assert_eq!(latest.total(), 38);
}

#[tokio::test]
async fn fundamentals_failure_marks_sections_failed() {
    let server = MockServer::start().await;
    let data = setup(&server).await;
    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/AAPL"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&server)
        .await;

    let f = data.fundamentals("AAPL").await;
    assert!(matches!(&f.income_statement, Section::Failed(r) if r.contains("503")));
    assert!(matches!(f.holders, Section::Failed(_)));
    assert!(matches!(f.recommendations, Section::Failed(_)));
}

#[tokio::test]
async fn options_take_nearest_expiration() {
    let server = MockServer::start().await;
    let data = setup(&server).await;
    Mock::given(method("GET"))
        .and(path("/v7/finance/options/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("options.json")))
        .mount(&server)
        .await;

    let chain = data.fetch_options("AAPL").await;
    let chain = chain.available().unwrap();
    assert_eq!(chain.calls.len(), 2);
    assert_eq!(chain.puts.len(), 1);
    assert_eq!(chain.head_calls(5)[0].strike, 150.0);
    assert_eq!(
        chain.expiration,
        chrono::NaiveDate::from_ymd_opt(2024, 6, 14)
    );
}

#[tokio::test]
async fn options_failure_is_a_failed_section() {
    let server = MockServer::start().await;
    let data = setup(&server).await;
    Mock::given(method("GET"))
        .and(path("/v7/finance/options/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(matches!(data.fetch_options("AAPL").await, Section::Failed(_)));
}
