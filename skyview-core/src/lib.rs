//! Core library for the `skyview` weather lookup.
//!
//! This crate defines:
//! - City name validation
//! - Configuration & credentials handling
//! - Abstraction over the weather provider, with an OpenWeather implementation
//! - Forecast reduction to one entry per day
//! - Condition to icon/background mapping
//! - The view controller state machine
//!
//! It is used by `skyview-cli`, but can also be reused by other front ends.

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod forecast;
pub mod model;
pub mod presentation;
pub mod provider;
pub mod validate;

pub use client::WeatherClient;
pub use config::Config;
pub use controller::{Controller, LookupTicket, Phase, ViewState};
pub use error::FetchError;
pub use model::{CurrentConditions, DailyForecastEntry, WeatherReport};
pub use presentation::{Condition, IconId, background_for, icon_for};
pub use provider::{WeatherProvider, provider_from_config};
pub use validate::{ValidatedName, ValidationError, validate};
