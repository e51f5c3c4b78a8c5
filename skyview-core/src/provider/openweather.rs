use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{
    FetchError, ValidatedName,
    error::Endpoint,
    model::{CurrentObservation, RawSample},
};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: Url,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        // Url::join drops the last segment unless the base ends with '/'.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .with_context(|| format!("Invalid weather service URL: {base_url}"))?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, base_url, http })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        city: &ValidatedName,
    ) -> Result<T, FetchError> {
        let path = match endpoint {
            Endpoint::Current => "weather",
            Endpoint::Forecast => "forecast",
        };
        let url = self.base_url.join(path).unwrap_or_else(|_| self.base_url.clone());

        tracing::debug!(city = %city, endpoint = %endpoint, "Requesting OpenWeather data");

        let res = self
            .http
            .get(url)
            .query(&[
                ("q", city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(FetchError::NetworkFailure)?;

        let status = res.status();
        tracing::debug!(status = %status, endpoint = %endpoint, "Received OpenWeather response");

        if endpoint == Endpoint::Current && status == StatusCode::NOT_FOUND {
            return Err(FetchError::CityNotFound);
        }

        if !status.is_success() {
            return Err(FetchError::ServiceError { endpoint, status: status.as_u16() });
        }

        let body = res.text().await.map_err(FetchError::NetworkFailure)?;

        serde_json::from_str(&body)
            .map_err(|source| FetchError::MalformedResponse { endpoint, source })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

/// Condition and description of the first weather entry, or "Unknown".
fn condition_of(weather: &[OwWeather]) -> (String, String) {
    weather
        .first()
        .map(|w| (w.main.clone(), w.description.clone()))
        .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()))
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &ValidatedName) -> Result<CurrentObservation, FetchError> {
        let parsed: OwCurrentResponse = self.get(Endpoint::Current, city).await?;
        let (condition, description) = condition_of(&parsed.weather);

        Ok(CurrentObservation {
            city_name: parsed.name,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition,
            description,
        })
    }

    async fn forecast(&self, city: &ValidatedName) -> Result<Vec<RawSample>, FetchError> {
        let parsed: OwForecastResponse = self.get(Endpoint::Forecast, city).await?;

        Ok(parsed
            .list
            .into_iter()
            .map(|entry| {
                let (condition, description) = condition_of(&entry.weather);
                RawSample {
                    timestamp: entry.dt,
                    temperature_c: entry.main.temp,
                    humidity_pct: entry.main.humidity,
                    wind_speed_mps: entry.wind.speed,
                    condition,
                    description,
                }
            })
            .collect())
    }
}
