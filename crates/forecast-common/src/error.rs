//! Error types for the forecast services.

use thiserror::Error;

/// Result type alias using ForecastError.
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Request-level errors for the forecast pipeline.
///
/// The display strings double as the client-facing `error` messages, so
/// they are part of the HTTP contract and must not be reworded casually.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    /// One or both required query parameters absent or empty.
    #[error("Please provide 'city' and 'date' in YYYY-MM-DD format")]
    MissingParameters,

    /// City not present in the fixed registry.
    #[error("City '{0}' not found")]
    CityNotFound(String),

    /// Date string does not parse as a valid YYYY-MM-DD calendar date.
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    /// Unexpected failure after validation.
    #[error("Internal server error")]
    Internal,
}

impl ForecastError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ForecastError::MissingParameters | ForecastError::InvalidDate => 400,
            ForecastError::CityNotFound(_) => 404,
            ForecastError::Internal => 500,
        }
    }
}
