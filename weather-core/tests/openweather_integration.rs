//! Integration tests for `WeatherService` over the real HTTP client,
//! with OpenWeather replaced by a wiremock server.

use std::{sync::Arc, time::Duration};

use weather_core::{
    HttpProviderClient, OpenWeatherEndpoints, ProviderClient, WeatherParams, WeatherService,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service(server: &MockServer) -> WeatherService {
    let client = HttpProviderClient::new(Duration::from_secs(2)).unwrap();
    WeatherService::new(Arc::new(client), OpenWeatherEndpoints::new(server.uri(), "TEST_KEY"))
}

fn city(name: &str) -> WeatherParams {
    WeatherParams { city: Some(name.into()), ..Default::default() }
}

#[tokio::test]
async fn test_city_lookup_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Kathmandu"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Kathmandu",
            "main": {"temp": 20}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Kathmandu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [{"dt_txt": "2026-01-05 12:00:00", "main": {"temp": 18}}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let out = service(&mock_server).lookup(&city("Kathmandu")).await.unwrap();

    assert_eq!(out.current["name"], "Kathmandu");
    assert_eq!(out.forecast["list"][0]["main"]["temp"], 18);
}

#[tokio::test]
async fn test_coordinate_lookup_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "27.7172"))
        .and(query_param("lon", "85.3240"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Kathmandu"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "27.7172"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"list": []})))
        .mount(&mock_server)
        .await;

    let params = WeatherParams {
        lat: Some("27.7172".into()),
        lon: Some("85.3240".into()),
        ..Default::default()
    };
    let out = service(&mock_server).lookup(&params).await.unwrap();

    assert_eq!(out.forecast["list"], serde_json::json!([]));
}

#[tokio::test]
async fn test_city_not_found_still_queries_forecast() {
    let mock_server = MockServer::start().await;
    let not_found = serde_json::json!({"cod": "404", "message": "city not found"});

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(404).set_body_json(not_found))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = service(&mock_server).lookup(&city("NonExistentCity")).await.unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.payload().error, "city not found");
}

#[tokio::test]
async fn test_html_forecast_ignored_when_city_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "city not found"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = service(&mock_server).lookup(&city("Atlantis")).await.unwrap_err();

    assert_eq!(err.status_code(), 404);
    assert_eq!(err.payload().error, "city not found");
}

#[tokio::test]
async fn test_non_json_body_is_internal_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let err = service(&mock_server).lookup(&city("Oslo")).await.unwrap_err();

    assert_eq!(err.status_code(), 500);
    assert!(err.payload().error.contains("Failed to parse provider JSON"));
}

#[tokio::test]
async fn test_client_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = HttpProviderClient::new(Duration::from_millis(100)).unwrap();
    let url = format!("{}/weather", mock_server.uri()).parse().unwrap();

    let err = client.get(&url).await.unwrap_err();
    assert!(err.to_string().contains("Failed to send request"));
}

#[tokio::test]
async fn test_api_key_not_leaked_in_errors() {
    let err = {
        let client = HttpProviderClient::new(Duration::from_millis(200)).unwrap();
        let url = "http://127.0.0.1:9/weather?q=Oslo&appid=TOP_SECRET".parse().unwrap();
        client.get(&url).await.unwrap_err()
    };

    assert!(!format!("{err:#}").contains("TOP_SECRET"));
}
