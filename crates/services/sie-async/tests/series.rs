use sie_async::{Client, SieConfig};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client<SieConfig> {
    let config = SieConfig::new()
        .with_api_base(server.uri())
        .with_token("test-token");
    Client::with_config(config)
}

fn mock_series_response() -> serde_json::Value {
    serde_json::json!({
        "bmx": {
            "series": [
                {
                    "idSerie": "SF63528",
                    "titulo": "Tipo de cambio pesos por dolar E.U.A.",
                    "datos": [
                        {"fecha": "02/01/2025", "dato": "17.2305"},
                        {"fecha": "03/01/2025", "dato": "17.1998"}
                    ]
                }
            ]
        }
    })
}

#[tokio::test]
async fn data_success_parses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SF63528/datos"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_series_response()))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.series().data("SF63528").await.unwrap();

    let series = &resp.bmx.unwrap().series;
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].id.as_deref(), Some("SF63528"));
    assert_eq!(
        series[0].title.as_deref(),
        Some("Tipo de cambio pesos por dolar E.U.A.")
    );
    assert_eq!(series[0].observations.len(), 2);
    assert_eq!(series[0].observations[1].value.as_deref(), Some("17.1998"));
}

#[tokio::test]
async fn latest_uses_oportuno_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SF63528/datos/oportuno"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_series_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.series().latest("SF63528").await.unwrap();
    assert!(resp.bmx.is_some());
}

#[tokio::test]
async fn range_interpolates_dates_into_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SF63528/datos/2024-01-01/2024-03-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_series_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .series()
        .range("SF63528", "2024-01-01", "2024-03-31")
        .await
        .unwrap();
    assert!(resp.bmx.is_some());
}

#[tokio::test]
async fn metadata_parses_descriptive_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SF63528"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bmx": {
                "series": [{
                    "idSerie": "SF63528",
                    "titulo": "Tipo de cambio pesos por dolar E.U.A.",
                    "fechaInicio": "12/11/1991",
                    "fechaFin": "03/01/2025",
                    "periodicidad": "Diaria",
                    "cifra": "Tipo de Cambio",
                    "unidad": "Pesos por Dolar"
                }]
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.series().metadata("SF63528").await.unwrap();

    let series = &resp.bmx.unwrap().series[0];
    assert_eq!(series.start_date.as_deref(), Some("12/11/1991"));
    assert_eq!(series.end_date.as_deref(), Some("03/01/2025"));
    assert_eq!(series.frequency.as_deref(), Some("Diaria"));
    assert_eq!(series.figure_type.as_deref(), Some("Tipo de Cambio"));
    assert_eq!(series.unit.as_deref(), Some("Pesos por Dolar"));
    assert!(series.observations.is_empty());
}

#[tokio::test]
async fn sends_fixed_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/series/SF63528/datos"))
        .and(header("user-agent", "banxico-mcp/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_series_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.series().data("SF63528").await.unwrap();
}
