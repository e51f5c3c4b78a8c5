//! Collapses the 3-hourly forecast feed into one entry per weekday.
//!
//! Grouping is by weekday *name*, not calendar date. A forecast window that
//! touches the same weekday twice folds both days into the earlier one. This
//! matches what the forecast strip has always shown, so it is kept as is.

use chrono::{DateTime, Datelike, TimeZone, Timelike, Weekday};

use crate::model::{DailyForecastEntry, RawSample, is_daytime, round_temperature, wind_kmh};

/// The strip never shows more than a week.
pub const MAX_FORECAST_DAYS: usize = 7;

/// en-US long weekday name.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Keep the first sample seen for each local weekday, in input order, capped
/// at [`MAX_FORECAST_DAYS`] entries.
pub fn reduce_to_daily<Tz: TimeZone>(samples: &[RawSample], tz: &Tz) -> Vec<DailyForecastEntry> {
    let mut days: Vec<DailyForecastEntry> = Vec::with_capacity(MAX_FORECAST_DAYS);

    for sample in samples {
        if days.len() == MAX_FORECAST_DAYS {
            break;
        }

        let Some(utc) = DateTime::from_timestamp(sample.timestamp, 0) else {
            tracing::debug!(timestamp = sample.timestamp, "Skipping out-of-range forecast sample");
            continue;
        };
        let local = utc.with_timezone(tz);
        let day_name = weekday_name(local.weekday());

        if days.iter().any(|d| d.day_name == day_name) {
            continue;
        }

        let hour = local.hour();
        days.push(DailyForecastEntry {
            day_name: day_name.to_string(),
            temperature_c: round_temperature(sample.temperature_c),
            condition: sample.condition.clone(),
            description: sample.description.clone(),
            humidity_pct: sample.humidity_pct,
            wind_speed_kmh: wind_kmh(sample.wind_speed_mps),
            sample_hour: hour,
            is_daytime: is_daytime(hour),
        });
    }

    days
}
