//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (frontend bundle present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::HealthResponse;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once `index.html` exists in the dist directory.
pub async fn readiness(State(state): State<Arc<AppState>>) -> ServerResult<StatusCode> {
    if state.has_bundle() {
        Ok(StatusCode::OK)
    } else {
        Err(ServerError::NotReady(format!(
            "{} not found",
            state.config.index_file().display()
        )))
    }
}

/// GET /health
///
/// Full health status with bundle and asset details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let bundle_ok = state.has_bundle();
    let missing_assets = state.missing_assets();

    let status = if !bundle_ok {
        "unhealthy"
    } else if missing_assets.is_empty() {
        "healthy"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        bundle: if bundle_ok { "ok" } else { "missing" }.to_string(),
        missing_assets,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
