use fintrack_api::{Client, Error, OptionsQuery, SummaryQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn mount_crumb(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/test/getcrumb"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Xy3crumb"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_quote_summary_success() {
    let mock_server = MockServer::start().await;
    mount_crumb(&mock_server).await;
    let body = load_fixture("quote_summary_profile.json");

    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/AAPL"))
        .and(query_param("modules", "price,assetProfile,financialData"))
        .and(query_param("crumb", "Xy3crumb"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .get_quote_summary("AAPL", &SummaryQuery::profile())
        .await;
    assert!(result.is_ok());

    let summary = result.unwrap();
    assert_eq!(summary.price.unwrap().display_name(), Some("Apple Inc."));
}

#[tokio::test]
async fn crumb_is_fetched_once() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test/getcrumb"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Xy3crumb"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/AAPL"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("quote_summary_profile.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    client
        .get_quote_summary("AAPL", &SummaryQuery::profile())
        .await
        .unwrap();
    client
        .get_quote_summary("AAPL", &SummaryQuery::fundamentals())
        .await
        .unwrap();
}

#[tokio::test]
async fn get_quote_summary_unknown_symbol() {
    let mock_server = MockServer::start().await;
    mount_crumb(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/ZZZZ"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(load_fixture("quote_summary_not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_quote_summary("ZZZZ", &SummaryQuery::profile())
        .await
        .unwrap_err();
    match err {
        Error::Upstream { code, description } => {
            assert_eq!(code, "Not Found");
            assert!(description.contains("ZZZZ"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn get_quote_summary_server_error() {
    let mock_server = MockServer::start().await;
    mount_crumb(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/AAPL"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_quote_summary("AAPL", &SummaryQuery::profile())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn get_quote_summary_malformed_json() {
    let mock_server = MockServer::start().await;
    mount_crumb(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/v10/finance/quoteSummary/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let result = client
        .get_quote_summary("AAPL", &SummaryQuery::profile())
        .await;
    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}

#[tokio::test]
async fn crumb_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test/getcrumb"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_quote_summary("AAPL", &SummaryQuery::profile())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 429, .. }));
}

#[tokio::test]
async fn crumb_html_body_is_missing_crumb() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/test/getcrumb"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>consent</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client
        .get_options("AAPL", &OptionsQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingCrumb));
}

#[tokio::test]
async fn get_options_success() {
    let mock_server = MockServer::start().await;
    mount_crumb(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/v7/finance/options/AAPL"))
        .and(query_param("date", "1718323200"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("options.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let chain = client
        .get_options("AAPL", &OptionsQuery::default().with_expiration(1718323200))
        .await
        .unwrap();
    assert_eq!(chain.underlying_symbol, "AAPL");
    assert_eq!(chain.options[0].calls[0].contract_symbol, "AAPL240614C00150000");
}
