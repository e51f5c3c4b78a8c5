use std::fmt;

use thiserror::Error;

/// Which of the two lookup requests failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Current,
    Forecast,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Current => "weather",
            Endpoint::Forecast => "forecast",
        })
    }
}

/// Errors that end a lookup attempt. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("City not found. Please check the spelling and try again.")]
    CityNotFound,

    #[error("Failed to fetch {endpoint} data (HTTP {status})")]
    ServiceError { endpoint: Endpoint, status: u16 },

    #[error("Failed to reach the weather service: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    #[error("Unexpected {endpoint} response from the weather service: {source}")]
    MalformedResponse {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}
