use serde::{Deserialize, Serialize};

/// Local hours in `[DAY_START_HOUR, DAY_END_HOUR)` count as daytime.
pub const DAY_START_HOUR: u32 = 6;
pub const DAY_END_HOUR: u32 = 18;

pub fn is_daytime(hour: u32) -> bool {
    (DAY_START_HOUR..DAY_END_HOUR).contains(&hour)
}

/// Round to the nearest integer, halves going up.
pub fn round_temperature(celsius: f64) -> i32 {
    (celsius + 0.5).floor() as i32
}

/// Convert m/s to km/h, rounded to the nearest integer.
pub fn wind_kmh(meters_per_second: f64) -> u32 {
    (meters_per_second * 3.6 + 0.5).floor().max(0.0) as u32
}

/// Current observation as reported by a provider, before unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentObservation {
    pub city_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: String,
    pub description: String,
}

/// One 3-hourly forecast sample as reported by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    /// Unix timestamp, seconds.
    pub timestamp: i64,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub condition: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: i32,
    pub humidity_pct: u8,
    pub wind_speed_kmh: u32,
    pub condition: String,
    pub description: String,
    pub city_name: String,
    pub is_daytime: bool,
}

impl CurrentConditions {
    pub fn from_observation(obs: CurrentObservation, local_hour: u32) -> Self {
        Self {
            temperature_c: round_temperature(obs.temperature_c),
            humidity_pct: obs.humidity_pct,
            wind_speed_kmh: wind_kmh(obs.wind_speed_mps),
            condition: obs.condition,
            description: obs.description,
            city_name: obs.city_name,
            is_daytime: is_daytime(local_hour),
        }
    }
}

/// The sample standing in for a whole day in the forecast strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    pub day_name: String,
    pub temperature_c: i32,
    pub condition: String,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_kmh: u32,
    pub sample_hour: u32,
    pub is_daytime: bool,
}

/// Result of one successful lookup. Current conditions and the daily
/// forecast always travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecastEntry>,
}
