//! Feature derivation for the weather classifier.

use chrono::{Datelike, NaiveDate};

use crate::cities::Coordinates;

/// Feature column names, in the order the classifier was trained with.
///
/// Model artifacts carry their own copy of this list and are rejected at
/// load time if the two disagree.
pub const FEATURE_NAMES: [&str; 5] = ["latitude", "longitude", "hour", "month", "dayofweek"];

/// Input to the classifier for one prediction.
///
/// `as_array` flattens this in the order of [`FEATURE_NAMES`]. That order
/// is a contract with the trained model: reordering silently corrupts
/// predictions without any error, so both sides must change together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub latitude: f64,
    pub longitude: f64,
    /// Hour of day, 0-23. Forecast requests carry only a date, so this is
    /// always 0 (midnight) on the serving path; the column exists because
    /// the model was trained with it.
    pub hour: u32,
    /// Month of year, 1-12.
    pub month: u32,
    /// Day of week, 0=Monday through 6=Sunday.
    pub dayofweek: u32,
}

impl FeatureVector {
    /// Derive features for a location and calendar date.
    ///
    /// Pure function of the inputs; never reads the wall clock. A date has
    /// no time-of-day component, so `hour` defaults to midnight.
    pub fn derive(coords: Coordinates, date: NaiveDate) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
            hour: 0,
            month: date.month(),
            dayofweek: date.weekday().num_days_from_monday(),
        }
    }

    /// Flatten into the trained column order.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.latitude,
            self.longitude,
            f64::from(self.hour),
            f64::from(self.month),
            f64::from(self.dayofweek),
        ]
    }
}
