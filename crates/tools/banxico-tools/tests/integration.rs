//! End-to-end tool tests against a mocked SIE API.

use banxico_tools::{BanxicoTools, MISSING_TOKEN_MSG};
use sie_async::SieConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tools_with_token(server: &MockServer) -> BanxicoTools {
    BanxicoTools::with_config(
        SieConfig::new()
            .with_api_base(server.uri())
            .with_token("test-token"),
    )
}

fn tools_without_token(server: &MockServer) -> BanxicoTools {
    BanxicoTools::with_config(SieConfig::new().with_api_base(server.uri()))
}

fn cetes_body(n: usize) -> serde_json::Value {
    let datos: Vec<_> = (0..n)
        .map(|i| serde_json::json!({"fecha": format!("{:02}/01/2025", i + 1), "dato": format!("{}.{:02}", 10 + i, i)}))
        .collect();
    serde_json::json!({
        "bmx": {
            "series": [{
                "idSerie": "SF282",
                "titulo": "CETES a 28 dias",
                "datos": datos
            }]
        }
    })
}

#[tokio::test]
async fn missing_token_short_circuits_every_data_tool() {
    let server = MockServer::start().await;
    // Any request at all fails the test
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tools = tools_without_token(&server);

    assert_eq!(tools.latest_usd_mxn_rate().await, MISSING_TOKEN_MSG);
    assert_eq!(tools.usd_mxn_historical_data(Some(30)).await, MISSING_TOKEN_MSG);
    assert_eq!(tools.series_metadata("SF63528").await, MISSING_TOKEN_MSG);
    assert_eq!(
        tools.date_range_data("2024-01-01", "2024-03-31", "SF63528").await,
        MISSING_TOKEN_MSG
    );
    assert_eq!(tools.inflation_data("monthly", Some(12)).await, MISSING_TOKEN_MSG);
    assert_eq!(tools.udis_data(Some(30)).await, MISSING_TOKEN_MSG);
    assert_eq!(tools.cetes_28_data(Some(30)).await, MISSING_TOKEN_MSG);
    assert_eq!(tools.reserves_data(Some(30)).await, MISSING_TOKEN_MSG);
    assert_eq!(tools.unemployment_data(Some(24)).await, MISSING_TOKEN_MSG);
}

#[tokio::test]
async fn invalid_inflation_type_lists_options_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let tools = tools_with_token(&server);
    let text = tools.inflation_data("weekly", Some(12)).await;

    assert!(text.starts_with("Invalid inflation type: weekly"));
    assert!(text.contains("monthly"));
    assert!(text.contains("accumulated"));
    assert!(text.contains("annual"));
}

#[tokio::test]
async fn cetes_pipeline_truncates_and_percent_formats() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SF282/datos"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cetes_body(40)))
        .expect(1)
        .mount(&server)
        .await;

    let tools = tools_with_token(&server);
    let text = tools.cetes_28_data(Some(5)).await;

    // Truncated to the trailing five of forty
    assert!(text.contains("Total data points: 5"));
    assert!(text.contains("CETES a 28 dias (ID: SF282)"));
    assert!(!text.contains("35/01/2025"));
    assert!(text.contains("36/01/2025: 45.35%"));
    assert!(text.contains("40/01/2025: 49.39%"));
}

#[tokio::test]
async fn inflation_type_selects_series() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SP30578/datos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bmx": {
                "series": [{
                    "idSerie": "SP30578",
                    "titulo": "Inflacion anual",
                    "datos": [{"fecha": "Ene 2025", "dato": "4.21"}]
                }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tools = tools_with_token(&server);
    let text = tools.inflation_data("annual", Some(12)).await;
    assert!(text.contains("Inflacion anual (ID: SP30578)"));
    assert!(text.contains("Ene 2025: 4.21%"));
}

#[tokio::test]
async fn transport_failure_collapses_to_domain_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SF308843/datos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let tools = tools_with_token(&server);
    let text = tools.reserves_data(Some(30)).await;
    assert_eq!(
        text,
        "Failed to retrieve Banxico reserve assets data. Please check your API token and network connection."
    );
}

#[tokio::test]
async fn empty_series_list_yields_domain_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SL1/datos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"bmx": {"series": []}})),
        )
        .mount(&server)
        .await;

    let tools = tools_with_token(&server);
    let text = tools.unemployment_data(Some(24)).await;
    assert_eq!(text, "No unemployment series found");
}

#[tokio::test]
async fn null_limit_skips_truncation() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SF63528/datos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cetes_body(25)))
        .mount(&server)
        .await;

    let tools = tools_with_token(&server);
    let text = tools.usd_mxn_historical_data(None).await;
    assert!(text.contains("Total data points: 25"));
    assert!(text.contains("... (15 more data points) ..."));
}

#[tokio::test]
async fn date_range_reaches_interpolated_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SP68257/datos/2024-06-01/2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bmx": {
                "series": [{
                    "idSerie": "SP68257",
                    "titulo": "UDIS",
                    "datos": [{"fecha": "01/06/2024", "dato": "8.112345"}]
                }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tools = tools_with_token(&server);
    let text = tools
        .date_range_data("2024-06-01", "2024-06-30", "SP68257")
        .await;
    assert!(text.contains("Series: UDIS (ID: SP68257)"));
    assert!(text.contains("01/06/2024: 8.112345"));
}
