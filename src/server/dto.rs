//! Response bodies

use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// healthy, degraded (assets missing) or unhealthy (no bundle)
    pub status: String,
    pub bundle: String,
    pub missing_assets: Vec<String>,
    pub uptime_seconds: u64,
    pub version: String,
}
