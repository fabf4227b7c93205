//! End-to-end tests for the conversion endpoint over a real socket.

use helper_service::config::ServiceConfig;
use reqwest::StatusCode;
use serde_json::{json, Value};

mod common;

const CONVERT: &str = "/api/helpers/date/german";

async fn convert(server: &common::TestServer, body: Value) -> (StatusCode, Value) {
    let res = common::client()
        .post(server.url(CONVERT))
        .json(&body)
        .send()
        .await
        .expect("server unreachable");
    let status = res.status();
    (status, res.json().await.unwrap())
}

#[tokio::test]
async fn test_example_scenarios() {
    let server = common::start_server(ServiceConfig::default()).await;

    let cases = [
        ("2026-02-09", "09.02.2026"),
        ("09.02.2026", "09.02.2026"),
        ("2026-02-09T15:30:00+01:00", "09.02.2026"),
        ("2026-02-09T23:30:00Z", "09.02.2026"),
        ("2026-02-09T15:30:00", "09.02.2026"),
        ("2026-02-09T23:30:00+00:00[Europe/Berlin]", "10.02.2026"),
        ("9.2.2026", "09.02.2026"),
    ];

    for (input, expected) in cases {
        let (status, body) = convert(&server, json!({ "dateValue": input })).await;
        assert_eq!(status, StatusCode::OK, "input: {input}");
        assert_eq!(body["originalValue"], input);
        assert_eq!(body["germanDate"], expected, "input: {input}");
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_format_error_and_validation_error_are_distinct() {
    let server = common::start_server(ServiceConfig::default()).await;

    let (status, format_error) = convert(&server, json!({ "dateValue": "02/09/2026" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(format_error["error"], "Ungültiges Datumsformat");
    assert_eq!(
        format_error["detail"],
        "Erlaubt sind z. B. 2026-02-09, 09.02.2026 oder ISO-Datetime"
    );

    let (status, validation_error) = convert(&server, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(validation_error["code"], "validation_error");
    assert_eq!(validation_error["violations"][0]["field"], "dateValue");
    assert!(validation_error.get("detail").is_none());
    assert!(format_error.get("violations").is_none());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_strict_inputs_are_rejected() {
    let server = common::start_server(ServiceConfig::default()).await;

    for input in [" 2026-02-09", "2026-02-09 ", "31.04.2026", "2026-02-09T25:00:00", "heute"] {
        let (status, body) = convert(&server, json!({ "dateValue": input })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "input: {input:?}");
        assert_eq!(body["error"], "Ungültiges Datumsformat");
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_requests() {
    let server = common::start_server(ServiceConfig::default()).await;
    let url = server.url(CONVERT);
    let client = common::client();

    let mut handles = Vec::new();
    for day in 1..=28u32 {
        let client = client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            let input = format!("2026-02-{day:02}T12:00:00Z");
            let res = client.post(&url).json(&json!({ "dateValue": input })).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::OK);
            let body: Value = res.json().await.unwrap();
            assert_eq!(body["germanDate"], format!("{day:02}.02.2026"));
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_health_and_openapi() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = common::client();

    let res = client.get(server.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
    let health: Value = res.json().await.unwrap();
    assert_eq!(health["status"], "ok");

    let res = client.get(server.url("/api-docs/openapi.json")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc: Value = res.json().await.unwrap();
    assert!(doc["paths"].get(CONVERT).is_some());

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_graceful_shutdown_stops_accepting() {
    let server = common::start_server(ServiceConfig::default()).await;
    let addr = server.addr;

    server.stop().await.unwrap();

    let result = common::client()
        .get(format!("http://{addr}/health"))
        .send()
        .await;
    assert!(result.is_err());
}
