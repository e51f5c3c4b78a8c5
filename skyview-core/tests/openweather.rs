//! OpenWeather provider against a mock HTTP server.
//!
//! Covers:
//! - Query parameters sent on both endpoints
//! - Status code to error mapping
//! - Full lookup through `WeatherClient`

use std::time::Duration;

use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skyview_core::{
    FetchError, WeatherClient, WeatherProvider, error::Endpoint,
    provider::openweather::OpenWeatherProvider, validate,
};

// Monday 2024-01-01 00:00:00 UTC
const MONDAY_MIDNIGHT: i64 = 1_704_067_200;

fn current_body() -> serde_json::Value {
    json!({
        "name": "Rabat",
        "dt": MONDAY_MIDNIGHT,
        "main": { "temp": 21.4, "feels_like": 21.0, "humidity": 64 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "wind": { "speed": 3.0 }
    })
}

fn forecast_body(samples: usize) -> serde_json::Value {
    let list: Vec<_> = (0..samples)
        .map(|i| {
            json!({
                "dt": MONDAY_MIDNIGHT + i as i64 * 3 * 3600,
                "main": { "temp": 10.0 + i as f64, "feels_like": 9.0, "humidity": 70 },
                "weather": [{ "main": "Rain", "description": "light rain" }],
                "wind": { "speed": 5.0 }
            })
        })
        .collect();

    json!({ "cod": "200", "city": { "name": "Rabat", "country": "MA" }, "list": list })
}

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new("TEST_KEY".into(), &server.uri(), Duration::from_secs(5)).unwrap()
}

async fn mount_json(server: &MockServer, endpoint: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn sends_city_units_and_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New York"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body()))
        .expect(1)
        .mount(&server)
        .await;

    let city = validate("New York").unwrap();
    let obs = provider_for(&server).current(&city).await.unwrap();

    assert_eq!(obs.city_name, "Rabat");
    assert_eq!(obs.condition, "Clear");
    assert_eq!(obs.description, "clear sky");
    assert_eq!(obs.humidity_pct, 64);
}

#[tokio::test]
async fn current_not_found_is_city_not_found() {
    let server = MockServer::start().await;
    mount_json(&server, "/weather", 404, json!({ "cod": "404", "message": "city not found" }))
        .await;

    let city = validate("Atlantis").unwrap();
    let err = provider_for(&server).current(&city).await.unwrap_err();

    assert!(matches!(err, FetchError::CityNotFound));
    assert!(err.to_string().contains("check the spelling"));
}

#[tokio::test]
async fn forecast_not_found_is_a_service_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/forecast", 404, json!({ "cod": "404" })).await;

    let city = validate("Atlantis").unwrap();
    let err = provider_for(&server).forecast(&city).await.unwrap_err();

    assert!(matches!(
        err,
        FetchError::ServiceError { endpoint: Endpoint::Forecast, status: 404 }
    ));
}

#[tokio::test]
async fn other_statuses_are_service_errors() {
    let server = MockServer::start().await;
    mount_json(&server, "/weather", 401, json!({ "cod": 401, "message": "Invalid API key" }))
        .await;

    let city = validate("Rabat").unwrap();
    let err = provider_for(&server).current(&city).await.unwrap_err();

    assert!(matches!(
        err,
        FetchError::ServiceError { endpoint: Endpoint::Current, status: 401 }
    ));
    assert_eq!(err.to_string(), "Failed to fetch weather data (HTTP 401)");
}

#[tokio::test]
async fn garbage_body_is_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let city = validate("Rabat").unwrap();
    let err = provider_for(&server).current(&city).await.unwrap_err();

    assert!(matches!(err, FetchError::MalformedResponse { endpoint: Endpoint::Current, .. }));
}

#[tokio::test]
async fn unreachable_server_is_network_failure() {
    // Nothing listens on the discard port.
    let provider =
        OpenWeatherProvider::new("KEY".into(), "http://127.0.0.1:9", Duration::from_secs(2))
            .unwrap();

    let city = validate("Rabat").unwrap();
    let err = provider.current(&city).await.unwrap_err();

    assert!(matches!(err, FetchError::NetworkFailure(_)));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(current_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let provider =
        OpenWeatherProvider::new("KEY".into(), &server.uri(), Duration::from_millis(200)).unwrap();
    let city = validate("Rabat").unwrap();
    let err = provider.current(&city).await.unwrap_err();

    assert!(matches!(err, FetchError::NetworkFailure(_)));
}

#[tokio::test]
async fn full_lookup_builds_report() {
    let server = MockServer::start().await;
    mount_json(&server, "/weather", 200, current_body()).await;
    // 10 samples, 3 hours apart from Monday 00:00: Monday and Tuesday.
    mount_json(&server, "/forecast", 200, forecast_body(10)).await;

    let client = WeatherClient::new(Box::new(provider_for(&server)));
    let city = validate("Rabat").unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 14, 0, 0).unwrap();

    let report = client.fetch_at(&city, now).await.unwrap();

    assert_eq!(report.current.temperature_c, 21);
    assert_eq!(report.current.wind_speed_kmh, 11);
    assert!(report.current.is_daytime);

    let days: Vec<_> = report.daily.iter().map(|d| d.day_name.as_str()).collect();
    assert_eq!(days, ["Monday", "Tuesday"]);
    assert_eq!(report.daily[1].temperature_c, 18);
    assert_eq!(report.daily[1].wind_speed_kmh, 18);
}

#[tokio::test]
async fn full_lookup_reports_missing_city() {
    let server = MockServer::start().await;
    mount_json(&server, "/weather", 404, json!({ "cod": "404" })).await;
    mount_json(&server, "/forecast", 404, json!({ "cod": "404" })).await;

    let client = WeatherClient::new(Box::new(provider_for(&server)));
    let city = validate("Atlantis").unwrap();

    let err = client.fetch_conditions_and_forecast(&city).await.unwrap_err();
    assert!(matches!(err, FetchError::CityNotFound));
}
