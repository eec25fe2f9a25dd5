//! Admindash Static Host
//!
//! Serves the built Leptos bundle and the dashboard images, built with Axum.
//! There is no data API: the page carries its own content.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (bundle present)
//! - `GET /health` - Full health status
//!
//! ## Static
//! - `GET /{file}` - Asset directory first, then the dist directory
//! - any other path - `index.html`, so section links like `/listings` load
//!   the page
//!
//! # Example
//!
//! ```rust,ignore
//! use admindash::config::ServerConfig;
//! use admindash::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::default();
//!     serve(AppState::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with health routes, static files and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let static_files = static_service(&state.config);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/health", health_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Images win over bundle files; unknown paths get the app shell
fn static_service(config: &ServerConfig) -> ServeDir<ServeDir<ServeFile>> {
    let app_shell = ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));
    ServeDir::new(&config.assets_dir).fallback(app_shell)
}

/// Start the host
pub async fn serve(state: AppState) -> ServerResult<()> {
    let addr = state.config.addr();

    if !state.has_bundle() {
        tracing::warn!(
            "Frontend bundle not found at {:?}; build admindash-ui first",
            state.config.index_file()
        );
    }
    for name in state.missing_assets() {
        tracing::warn!(asset = %name, dir = ?state.config.assets_dir, "Missing dashboard asset");
    }

    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Admindash listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Admindash shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    struct TestSite {
        router: Router,
        _dist: TempDir,
        _assets: TempDir,
    }

    fn create_test_app(with_bundle: bool) -> TestSite {
        let dist = tempdir().unwrap();
        let assets = tempdir().unwrap();

        if with_bundle {
            std::fs::write(dist.path().join("index.html"), "<html>app shell</html>").unwrap();
            std::fs::write(dist.path().join("admindash-ui.js"), "// bundle").unwrap();
        }
        std::fs::write(assets.path().join("most-clicked-1.jpg"), "jpeg bytes").unwrap();

        let config = ServerConfig {
            dist_dir: dist.path().to_path_buf(),
            assets_dir: assets.path().to_path_buf(),
            ..Default::default()
        };

        TestSite {
            router: build_router(AppState::new(config)),
            _dist: dist,
            _assets: assets,
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn test_health_live() {
        let site = create_test_app(false);
        let (status, _) = get(site.router, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_with_bundle() {
        let site = create_test_app(true);
        let (status, _) = get(site.router, "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_without_bundle() {
        let site = create_test_app(false);
        let (status, body) = get(site.router, "/health/ready").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("NOT_READY"));
    }

    #[tokio::test]
    async fn test_health_full_reports_missing_assets() {
        let site = create_test_app(true);
        let (status, body) = get(site.router, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["bundle"], "ok");

        let missing = json["missing_assets"].as_array().unwrap();
        assert_eq!(missing.len(), 12);
        assert!(!missing.iter().any(|m| m == "most-clicked-1.jpg"));
    }

    #[tokio::test]
    async fn test_serves_asset_images() {
        let site = create_test_app(true);
        let (status, body) = get(site.router, "/most-clicked-1.jpg").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "jpeg bytes");
    }

    #[tokio::test]
    async fn test_serves_bundle_files() {
        let site = create_test_app(true);
        let (status, body) = get(site.router, "/admindash-ui.js").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "// bundle");
    }

    #[tokio::test]
    async fn test_section_paths_get_app_shell() {
        for path in ["/", "/listings", "/transactions"] {
            let site = create_test_app(true);
            let (status, body) = get(site.router, path).await;

            assert_eq!(status, StatusCode::OK, "path {}", path);
            assert!(body.contains("app shell"), "path {}", path);
        }
    }
}
