use chrono::{DateTime, Local, TimeZone, Timelike};

use crate::{
    FetchError, ValidatedName,
    forecast::reduce_to_daily,
    model::{CurrentConditions, WeatherReport},
    provider::WeatherProvider,
};

/// Fetches current conditions plus the daily forecast for a city.
#[derive(Debug)]
pub struct WeatherClient {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherClient {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Look a city up using the local clock and time zone.
    pub async fn fetch_conditions_and_forecast(
        &self,
        city: &ValidatedName,
    ) -> Result<WeatherReport, FetchError> {
        self.fetch_at(city, Local::now()).await
    }

    /// Look a city up as if the local wall clock read `now`. Forecast days and
    /// hours are derived in `now`'s time zone.
    pub async fn fetch_at<Tz>(
        &self,
        city: &ValidatedName,
        now: DateTime<Tz>,
    ) -> Result<WeatherReport, FetchError>
    where
        Tz: TimeZone,
    {
        let local_hour = now.hour();
        let tz = now.timezone();

        let (current, forecast) =
            tokio::join!(self.provider.current(city), self.provider.forecast(city));

        // A not-found city is reported even if the forecast failed too.
        let current = current?;
        let samples = forecast?;

        let report = WeatherReport {
            current: CurrentConditions::from_observation(current, local_hour),
            daily: reduce_to_daily(&samples, &tz),
        };

        tracing::info!(
            city = %report.current.city_name,
            temp = report.current.temperature_c,
            days = report.daily.len(),
            "Weather data fetched successfully"
        );

        Ok(report)
    }
}
