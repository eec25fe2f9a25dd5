//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::assets;
use crate::config::ServerConfig;
use crate::model::Dashboard;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Host configuration
    pub config: Arc<ServerConfig>,
    /// Page content, used to derive the asset manifest
    pub dashboard: Arc<Dashboard>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_dashboard(config, Dashboard::fixture())
    }

    pub fn with_dashboard(config: ServerConfig, dashboard: Dashboard) -> Self {
        Self {
            config: Arc::new(config),
            dashboard: Arc::new(dashboard),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the built frontend is present
    pub fn has_bundle(&self) -> bool {
        self.config.index_file().is_file()
    }

    pub fn missing_assets(&self) -> Vec<String> {
        assets::missing_assets(&self.config.assets_dir, &self.dashboard)
    }
}
