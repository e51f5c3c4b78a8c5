//! View state and the transitions that drive it.
//!
//! The controller is synchronous: it hands out a [`LookupTicket`] when a
//! lookup should start and is told the outcome through [`Controller::settle`].
//! Whoever owns the controller runs the actual request in between. Tickets
//! carry a monotonically increasing token, and only the latest one may
//! settle, so a slow response to an older search never overwrites a newer
//! one.

use crate::{
    FetchError, ValidatedName, ValidationError,
    model::{DailyForecastEntry, WeatherReport},
    presentation::{self, Condition},
    validate,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Banner-level message for the failed lookup.
    Errored(String),
}

/// Permission to run one lookup. Hand it back to [`Controller::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    token: u64,
    city: ValidatedName,
}

impl LookupTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn city(&self) -> &ValidatedName {
        &self.city
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub city_input: String,
    pub input_error: Option<ValidationError>,
    pub phase: Phase,
    /// Last successful lookup. May be stale while `phase` is `Errored`.
    pub report: Option<WeatherReport>,
    /// Forecast day shown in the detail overlay.
    pub selected: Option<DailyForecastEntry>,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Errored(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Controller {
    state: ViewState,
    latest_token: u64,
}

impl Controller {
    /// Start idle with `default_city` in the search field.
    pub fn new(default_city: impl Into<String>) -> Self {
        Self {
            state: ViewState { city_input: default_city.into(), ..ViewState::default() },
            latest_token: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Initial mount: load whatever is in the search field.
    pub fn mount(&mut self) -> Option<LookupTicket> {
        self.submit().ok()
    }

    /// Store edited search text, validating it live unless it is blank.
    pub fn edit_input(&mut self, text: impl Into<String>) {
        self.state.city_input = text.into();
        self.state.input_error = if self.state.city_input.trim().is_empty() {
            None
        } else {
            validate(&self.state.city_input).err()
        };
    }

    /// Whether the search button would be enabled.
    pub fn can_submit(&self) -> bool {
        self.state.input_error.is_none() && !self.state.city_input.trim().is_empty()
    }

    /// Validate the search field and, if it passes, start a lookup.
    ///
    /// On failure the phase is left alone and the message is shown inline.
    pub fn submit(&mut self) -> Result<LookupTicket, ValidationError> {
        let city = match validate(&self.state.city_input) {
            Ok(city) => city,
            Err(err) => {
                self.state.input_error = Some(err);
                return Err(err);
            }
        };

        self.state.input_error = None;
        self.latest_token += 1;
        self.state.phase = Phase::Loading;

        tracing::debug!(city = %city, token = self.latest_token, "Starting lookup");

        Ok(LookupTicket { token: self.latest_token, city })
    }

    /// Apply a lookup result. Returns false, leaving state untouched, when a
    /// newer lookup has been started since `ticket` was issued.
    pub fn settle(
        &mut self,
        ticket: &LookupTicket,
        result: Result<WeatherReport, FetchError>,
    ) -> bool {
        if ticket.token != self.latest_token {
            tracing::debug!(
                token = ticket.token,
                latest = self.latest_token,
                "Discarding stale lookup result"
            );
            return false;
        }

        match result {
            Ok(report) => {
                self.state.report = Some(report);
                self.state.phase = Phase::Loaded;
            }
            Err(err) => {
                tracing::warn!(city = %ticket.city, error = %err, "Lookup failed");
                self.state.phase = Phase::Errored(err.to_string());
            }
        }

        true
    }

    /// Open the detail overlay for the `index`th forecast day.
    pub fn select_day(&mut self, index: usize) -> Option<&DailyForecastEntry> {
        let entry = self.state.report.as_ref()?.daily.get(index)?.clone();
        self.state.selected = Some(entry);
        self.state.selected.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.state.selected = None;
    }

    /// Background image for the current conditions, clear sky by day before
    /// anything has loaded.
    pub fn background(&self) -> &'static str {
        match &self.state.report {
            Some(report) => presentation::background_for(
                report.current.condition.as_str(),
                report.current.is_daytime,
            ),
            None => presentation::background_for(Condition::Clear, true),
        }
    }
}
