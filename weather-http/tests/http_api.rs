//! End-to-end tests for the HTTP front end.
//!
//! Each test spins up the real router on a local port with the core client
//! pointed at a wiremock upstream, then drives it with reqwest.

use serde_json::json;
use weather_core::{Config, WeatherApiClient};
use weather_http::routes;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_app(upstream_url: String) -> String {
    let config = Config {
        api_key: Some("TEST_KEY".to_string()),
        base_url: upstream_url,
        ..Config::default()
    };
    let client = WeatherApiClient::from_config(&config).expect("client builds");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, routes::router(client)).await.unwrap();
    });

    format!("http://{addr}")
}

fn istanbul_payload() -> serde_json::Value {
    json!({
        "location": {"name": "Istanbul", "country": "Turkey"},
        "current": {"temp_c": 21.5, "condition": {"text": "Clear"}}
    })
}

#[tokio::test]
async fn get_weather_returns_normalized_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("q", "41.0082,28.9784"))
        .respond_with(ResponseTemplate::new(200).set_body_json(istanbul_payload()))
        .mount(&mock_server)
        .await;

    let base = spawn_app(mock_server.uri()).await;

    let response = reqwest::get(format!("{base}/weather?lat=41.0082&lon=28.9784"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["temperature"], 21.5);
    assert_eq!(body["location"], "Istanbul");
    assert_eq!(body["country"], "Turkey");
    assert_eq!(body["condition"], "Clear");
}

#[tokio::test]
async fn post_weather_accepts_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(istanbul_payload()))
        .mount(&mock_server)
        .await;

    let base = spawn_app(mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/weather"))
        .json(&json!({"latitude": 41.0082, "longitude": 28.9784}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["location"], "Istanbul");
}

#[tokio::test]
async fn out_of_range_latitude_is_a_client_error_and_never_hits_upstream() {
    let mock_server = MockServer::start().await;
    let base = spawn_app(mock_server.uri()).await;

    let response = reqwest::get(format!("{base}/weather?lat=91.0&lon=28.9784"))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("latitude"), "detail should name latitude: {detail}");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "validation failures must not reach the provider");
}

#[tokio::test]
async fn post_with_out_of_range_longitude_is_a_client_error() {
    let mock_server = MockServer::start().await;
    let base = spawn_app(mock_server.uri()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/weather"))
        .json(&json!({"latitude": 41.0, "longitude": 200.0}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("longitude"));
}

#[tokio::test]
async fn upstream_failure_maps_to_client_error_with_status_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(403).set_body_string("key disabled"))
        .mount(&mock_server)
        .await;

    let base = spawn_app(mock_server.uri()).await;

    let response = reqwest::get(format!("{base}/weather?lat=41.0082&lon=28.9784"))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("403"));
}

#[tokio::test]
async fn incomplete_upstream_payload_maps_to_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location": {"name": "Istanbul", "country": "Turkey"},
            "current": {"condition": {"text": "Clear"}}
        })))
        .mount(&mock_server)
        .await;

    let base = spawn_app(mock_server.uri()).await;

    let response = reqwest::get(format!("{base}/weather?lat=41.0082&lon=28.9784"))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("temperature data not found"));
}

#[tokio::test]
async fn health_reports_liveness() {
    let mock_server = MockServer::start().await;
    let base = spawn_app(mock_server.uri()).await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn landing_page_is_served() {
    let mock_server = MockServer::start().await;
    let base = spawn_app(mock_server.uri()).await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert!(body.contains("Weather API"));
    assert!(body.contains("/weather"));
}
