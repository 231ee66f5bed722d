//! Common types and utilities shared across the forecast services.

pub mod cities;
pub mod error;
pub mod features;
pub mod time;

pub use cities::{CityRegistry, Coordinates};
pub use error::{ForecastError, ForecastResult};
pub use features::{FeatureVector, FEATURE_NAMES};
pub use time::{parse_forecast_date, DATE_FORMAT};
