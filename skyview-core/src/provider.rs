use crate::{
    Config, FetchError, ValidatedName,
    model::{CurrentObservation, RawSample},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of raw weather data for a validated city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &ValidatedName) -> Result<CurrentObservation, FetchError>;

    /// 3-hourly samples in chronological order.
    async fn forecast(&self, city: &ValidatedName) -> Result<Vec<RawSample>, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    let provider = OpenWeatherProvider::new(api_key, &config.base_url, config.timeout())?;

    Ok(Box::new(provider))
}
