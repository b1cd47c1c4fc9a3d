//! End-to-end adapter tests against a mocked OpenWeatherMap server

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use application::error::ApplicationError;
use application::ports::WeatherPort;
use infrastructure::OpenWeatherAdapter;
use integration_openweather::{OpenWeatherClient, OpenWeatherConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter_for(server: &MockServer) -> OpenWeatherAdapter {
    let config = OpenWeatherConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
        lang: "pl".to_string(),
    };
    let client = OpenWeatherClient::new(config).expect("client");
    OpenWeatherAdapter::new(client)
}

fn current_body() -> serde_json::Value {
    serde_json::json!({
        "main": { "temp": 9.4, "pressure": 1021, "humidity": 77 },
        "weather": [{ "main": "Drizzle", "description": "mżawka" }],
        "wind": { "speed": 6.1, "deg": 315 },
        "clouds": { "all": 100 },
        "rain": { "1h": 0.2 }
    })
}

fn forecast_body() -> serde_json::Value {
    serde_json::json!({
        "list": [
            {
                "dt_txt": "2024-05-01 09:00:00",
                "main": { "temp": 10.0 },
                "weather": [{ "main": "Rain" }],
                "pop": 0.8
            },
            {
                "dt_txt": "2024-05-01 12:00:00",
                "main": { "temp": 13.0 },
                "weather": [{ "main": "Clouds" }],
                "pop": 0.1
            }
        ]
    })
}

#[tokio::test]
async fn current_weather_maps_the_full_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Gdańsk"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;

    let conditions = adapter_for(&server)
        .current_weather("Gdańsk")
        .await
        .expect("current");

    assert_eq!(conditions.condition, "Drizzle");
    assert_eq!(conditions.temperature.celsius(), 9.4);
    assert_eq!(conditions.cloud_cover, 100);
    assert_eq!(conditions.wind_direction().label(), "NW");
    assert!(conditions.precipitation.is_some());
}

#[tokio::test]
async fn forecast_samples_arrive_in_api_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Wrocław"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&server)
        .await;

    let samples = adapter_for(&server)
        .forecast_samples("Wrocław")
        .await
        .expect("forecast");

    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].condition.as_deref(), Some("Rain"));
    assert_eq!(samples[0].precipitation_probability, Some(0.8));
    assert!(samples[0].timestamp < samples[1].timestamp);
}

#[tokio::test]
async fn unknown_city_surfaces_as_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({ "cod": "404", "message": "city not found" })),
        )
        .mount(&server)
        .await;

    let result = adapter_for(&server).current_weather("Atlantis").await;
    match result {
        Err(ApplicationError::NotFound(msg)) => assert!(msg.contains("Atlantis")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limiting_surfaces_as_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let result = adapter_for(&server).forecast_samples("Kraków").await;
    assert!(matches!(result, Err(ApplicationError::RateLimited)));
}

#[tokio::test]
async fn bad_api_key_surfaces_as_configuration_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = adapter_for(&server).current_weather("Poznań").await;
    assert!(matches!(result, Err(ApplicationError::Configuration(_))));
}

#[tokio::test]
async fn availability_reflects_server_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .mount(&server)
        .await;

    assert!(adapter_for(&server).is_available().await);
}
