//! Health endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::HealthResponse;

/// `GET /api/health` — reports the crate version and whether the
/// reference-data caches are populated.
pub async fn health_handler(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: idgate_core::version().to_string(),
        codes_warm: state.codes.is_warm().await,
    }))
}
