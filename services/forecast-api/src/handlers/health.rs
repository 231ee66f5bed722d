//! Health and readiness handlers.

use std::sync::Arc;

use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub trees: usize,
    pub labels: usize,
    pub cities: usize,
}

/// GET /health - Basic health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check
///
/// The state only exists after a successful artifact load, so readiness
/// reports the loaded model shape rather than re-probing anything.
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        ready: true,
        trees: state.predictor.n_trees(),
        labels: state.predictor.label_vocabulary().len(),
        cities: state.registry.len(),
    })
}
