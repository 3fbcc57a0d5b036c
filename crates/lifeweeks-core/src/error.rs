//! Error types for Life in Weeks

use thiserror::Error;

/// Core errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LifeError {
    // Input errors
    #[error("Invalid birthdate: {0}")]
    InvalidBirthdate(String),

    #[error("Birthdate must be in the past")]
    BirthdateInFuture,

    #[error("Implied age of {years:.1} years is outside 0..=120")]
    AgeOutOfRange { years: f64 },

    // Parameter errors
    #[error("Life expectancy must be between 1 and 150 years, got {0}")]
    InvalidLifeExpectancy(u32),

    #[error("Hours per week must be a positive number, got {0}")]
    InvalidHoursPerWeek(f64),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LifeError {
    /// True when the error was caused by the birthdate a user typed in
    pub fn is_birthdate_error(&self) -> bool {
        matches!(
            self,
            LifeError::InvalidBirthdate(_)
                | LifeError::BirthdateInFuture
                | LifeError::AgeOutOfRange { .. }
        )
    }
}

/// Result type for Life in Weeks operations
pub type LifeResult<T> = Result<T, LifeError>;
