//! Application state for the forecast API.

use anyhow::{Context, Result};

use forecast_common::CityRegistry;
use forecast_model::WeatherPredictor;

use crate::config::ArtifactConfig;

/// Shared application state.
///
/// Built once at startup and read-only afterwards, so it is shared across
/// request tasks behind an `Arc` without locking.
pub struct AppState {
    /// The fixed city-to-coordinate registry.
    pub registry: CityRegistry,

    /// Pre-loaded classifier and label decoder.
    pub predictor: WeatherPredictor,
}

impl AppState {
    /// Load the artifacts and build the state.
    ///
    /// Failure means the process must not serve traffic.
    pub fn new(config: &ArtifactConfig) -> Result<Self> {
        let predictor = WeatherPredictor::load(&config.model_path, &config.labels_path)
            .context("Failed to load model artifacts")?;

        Ok(Self {
            registry: CityRegistry::kerala(),
            predictor,
        })
    }
}
