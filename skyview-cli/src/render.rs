//! Plain-text rendering of the view state.

use skyview_core::{
    Condition, CurrentConditions, DailyForecastEntry, IconId, ViewState, icon_for,
};

fn icon(condition: &str, description: &str, is_daytime: bool) -> IconId {
    icon_for(Condition::refine(condition, description), is_daytime)
}

fn day_or_night(is_daytime: bool) -> &'static str {
    if is_daytime { "Day" } else { "Night" }
}

/// Whole screen: background, search field, banners, panels and overlay.
pub fn render_view(state: &ViewState, background: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("Background: {background}\n"));
    out.push_str(&format!("Search: {}\n", state.city_input));
    if let Some(err) = &state.input_error {
        out.push_str(&format!("  ! {err}\n"));
    }

    if let Some(msg) = state.error() {
        out.push_str(&format!("\n[ {msg} ]\n"));
    }

    if state.is_loading() {
        out.push_str("\nLoading...\n");
        return out;
    }

    if let Some(report) = &state.report {
        out.push('\n');
        out.push_str(&render_current(&report.current));
        if !report.daily.is_empty() {
            out.push('\n');
            out.push_str(&render_forecast(&report.daily));
        }
        if let Some(day) = &state.selected {
            out.push('\n');
            out.push_str(&render_details(day));
        }
    }

    out
}

pub fn render_current(current: &CurrentConditions) -> String {
    let icon = icon(&current.condition, &current.description, current.is_daytime);

    let mut out = String::new();
    out.push_str(&format!("{}\n", current.city_name));
    out.push_str(&format!(
        "{} ({})\n",
        current.description,
        day_or_night(current.is_daytime)
    ));
    out.push_str(&format!("{} {icon}\n", icon.glyph()));
    out.push_str(&format!("  Temperature  {}°C\n", current.temperature_c));
    out.push_str(&format!("  Humidity     {}%\n", current.humidity_pct));
    out.push_str(&format!("  Wind Speed   {} km/h\n", current.wind_speed_kmh));
    out
}

pub fn render_forecast(days: &[DailyForecastEntry]) -> String {
    let mut out = String::from("7-Day Forecast\n");
    for (i, day) in days.iter().enumerate() {
        let icon = icon(&day.condition, &day.description, day.is_daytime);
        out.push_str(&format!(
            "  {}. {:<10} {} {:>4}°C  {:<13} {}\n",
            i + 1,
            day.day_name,
            icon.glyph(),
            day.temperature_c,
            day.condition,
            day_or_night(day.is_daytime),
        ));
    }
    out
}

/// Detail overlay for one forecast day.
pub fn render_details(day: &DailyForecastEntry) -> String {
    let icon = icon(&day.condition, &day.description, day.is_daytime);

    let mut out = String::new();
    out.push_str(&format!("┌ {} ┐\n", day.day_name));
    out.push_str(&format!("  {} ({})\n", day.description, day_or_night(day.is_daytime)));
    out.push_str(&format!("  {} {icon}\n", icon.glyph()));
    out.push_str(&format!("  Temperature  {}°C\n", day.temperature_c));
    out.push_str(&format!("  Humidity     {}%\n", day.humidity_pct));
    out.push_str(&format!("  Wind Speed   {} km/h\n", day.wind_speed_kmh));
    out.push_str(&format!("  Sampled at   {:02}:00\n", day.sample_hour));
    out
}
