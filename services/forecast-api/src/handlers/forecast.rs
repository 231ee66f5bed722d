//! Forecast query handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::Response,
};
use serde::{Deserialize, Serialize};

use forecast_common::{parse_forecast_date, FeatureVector, ForecastError};

use crate::state::AppState;

/// Source tag echoed in every successful response.
pub const SOURCE_TAG: &str = "ML Model";

/// Query parameters for the forecast endpoint.
///
/// Both are required; they are optional here so that absence is handled
/// as a validation error rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ForecastQueryParams {
    pub city: Option<String>,
    pub date: Option<String>,
}

/// Successful forecast envelope.
#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub source: &'static str,
    /// The trimmed request city, echoed back verbatim.
    pub city: String,
    /// The trimmed request date string, echoed back without reformatting.
    pub date: String,
    pub predicted_weather: String,
}

/// Error body: a single client-facing message, no internal detail.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// GET /forecast
pub async fn forecast_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ForecastQueryParams>,
) -> Response {
    // Absent and empty-after-trim are the same validation failure.
    let (city, date_str) = match (params.city.as_deref(), params.date.as_deref()) {
        (Some(city), Some(date)) if !city.trim().is_empty() && !date.trim().is_empty() => {
            (city.trim(), date.trim())
        }
        _ => return error_response(&ForecastError::MissingParameters),
    };

    let Some(coords) = state.registry.lookup(city) else {
        return error_response(&ForecastError::CityNotFound(city.to_string()));
    };

    let date = match parse_forecast_date(date_str) {
        Ok(date) => date,
        Err(err) => return error_response(&err),
    };

    let features = FeatureVector::derive(coords, date);

    let predicted_weather = match state.predictor.predict(&features) {
        Ok(label) => label,
        Err(err) => {
            tracing::error!(error = %err, city, date = date_str, "Prediction failed");
            return error_response(&ForecastError::Internal);
        }
    };

    let body = ForecastResponse {
        source: SOURCE_TAG,
        city: city.to_string(),
        date: date_str.to_string(),
        predicted_weather,
    };

    json_response(StatusCode::OK, &body)
}

fn error_response(err: &ForecastError) -> Response {
    let status = StatusCode::from_u16(err.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    json_response(
        status,
        &ErrorBody {
            error: err.to_string(),
        },
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let json = serde_json::to_string(body).unwrap_or_default();

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}
