//! Integration tests for the Yahoo Finance provider

use serde_json::json;
use stockwatch::error::ProviderError;
use stockwatch::services::market_data::PriceSeriesProvider;
use stockwatch::services::yahoo::YahooFinanceProvider;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chart_body() -> serde_json::Value {
    // 2024-03-04, 2024-03-05, 2024-03-06, 2024-03-07 at 14:30 UTC
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "IONQ", "regularMarketPrice": 10.5 },
                "timestamp": [1709562600, 1709649000, 1709735400, 1709821800],
                "indicators": {
                    "quote": [{
                        "open":   [10.0, 11.0, null, 12.0],
                        "high":   [10.5, 11.5, null, 12.5],
                        "low":    [9.5, 10.5, null, 11.5],
                        "close":  [10.0, 11.0, null, 12.0],
                        "volume": [1000, 2000, null, null]
                    }],
                    "adjclose": [{ "adjclose": [5.0, 5.5, null, 12.0] }]
                }
            }],
            "error": null
        }
    })
}

async fn provider_for(server: &MockServer) -> YahooFinanceProvider {
    YahooFinanceProvider::new(server.uri()).expect("client should build")
}

#[tokio::test]
async fn parses_and_adjusts_daily_bars() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/IONQ"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
        .mount(&server)
        .await;

    let series = provider_for(&server).await.fetch("ionq", 200).await.unwrap();

    assert_eq!(series.len(), 3);
    let bars = series.bars();
    assert_eq!(bars[0].date.to_string(), "2024-03-04");
    assert_eq!(bars[2].date.to_string(), "2024-03-07");
    assert_eq!(series.closes(), vec![5.0, 5.5, 12.0]);
    assert_eq!(bars[0].high, 5.25);
    assert_eq!(bars[0].volume, Some(1000));
    assert_eq!(bars[2].volume, None);
}

#[tokio::test]
async fn share_class_symbols_use_hyphen() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BRK-B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
        .expect(1)
        .mount(&server)
        .await;

    let series = provider_for(&server).await.fetch("BRK.B", 30).await.unwrap();
    assert!(!series.is_empty());
}

#[tokio::test]
async fn empty_result_is_empty_series() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/RGTI"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "chart": { "result": [], "error": null } })),
        )
        .mount(&server)
        .await;

    let series = provider_for(&server).await.fetch("RGTI", 200).await.unwrap();
    assert!(series.is_empty());
}

#[tokio::test]
async fn unknown_ticker_is_no_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = provider_for(&server).await.fetch("NOPE", 200).await.unwrap_err();
    assert!(matches!(err, ProviderError::NoData(_)));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn api_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/QUBT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Bad Request", "description": "Invalid input" }
            }
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server).await.fetch("QUBT", 200).await.unwrap_err();
    assert!(matches!(err, ProviderError::Api { ref code, .. } if code == "Bad Request"));
}

#[tokio::test]
async fn server_error_is_transient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/IBM"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = provider_for(&server).await.fetch("IBM", 200).await.unwrap_err();
    assert!(matches!(err, ProviderError::Status(503)));
    assert!(err.is_transient());
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/MSFT"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider_for(&server).await.fetch("MSFT", 200).await.unwrap_err();
    assert!(matches!(err, ProviderError::Parse(_)));
}
