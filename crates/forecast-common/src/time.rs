//! Forecast date parsing.

use chrono::NaiveDate;

use crate::error::{ForecastError, ForecastResult};

/// The only accepted request date format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a request date string as a YYYY-MM-DD calendar date.
///
/// Any failure (wrong separators, impossible dates like 2024-13-01,
/// trailing garbage) maps to [`ForecastError::InvalidDate`].
pub fn parse_forecast_date(date_str: &str) -> ForecastResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT).map_err(|_| ForecastError::InvalidDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_forecast_date("2025-06-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_parse_rejects_wrong_order() {
        assert_eq!(
            parse_forecast_date("15-06-2025"),
            Err(ForecastError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_rejects_slashes() {
        assert_eq!(
            parse_forecast_date("2024/01/01"),
            Err(ForecastError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_rejects_impossible_month() {
        assert_eq!(
            parse_forecast_date("2024-13-01"),
            Err(ForecastError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_rejects_impossible_day() {
        assert_eq!(
            parse_forecast_date("2025-02-30"),
            Err(ForecastError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_rejects_nonsense() {
        assert_eq!(
            parse_forecast_date("not-a-date"),
            Err(ForecastError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert_eq!(
            parse_forecast_date("2025-06-15extra"),
            Err(ForecastError::InvalidDate)
        );
    }

    #[test]
    fn test_parse_accepts_leap_day() {
        assert!(parse_forecast_date("2024-02-29").is_ok());
        assert_eq!(
            parse_forecast_date("2025-02-29"),
            Err(ForecastError::InvalidDate)
        );
    }
}
