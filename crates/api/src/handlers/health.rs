//! Liveness endpoint

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::context::AppContext;
use crate::errors::ApiError;
use crate::utils::logging::log_command_execution;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /api/health`: 200 once the profile store answers a trivial query.
pub async fn health(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<HealthResponse>, ApiError> {
    let start = Instant::now();
    let result = ctx.health_check().await.map_err(ApiError::from);
    log_command_execution("health::health", start.elapsed(), result.as_ref().err());

    result.map(|()| Json(HealthResponse { status: "ok" }))
}
