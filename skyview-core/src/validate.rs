use std::fmt;

use thiserror::Error;

/// Why a city name was rejected before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a city name")]
    EmptyInput,

    #[error("City name should only contain letters, spaces, and hyphens")]
    InvalidCharacters,
}

/// A trimmed city name that passed [`validate`].
///
/// The only way to build one is through [`validate`], so providers never see
/// unchecked input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedName(String);

impl ValidatedName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ValidatedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check a free-text city name: ASCII letters, whitespace and hyphens only.
pub fn validate(raw: &str) -> Result<ValidatedName, ValidationError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let allowed = |c: char| c.is_ascii_alphabetic() || c.is_ascii_whitespace() || c == '-';
    if !trimmed.chars().all(allowed) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(ValidatedName(trimmed.to_string()))
}
