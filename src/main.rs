//! Admindash CLI
//!
//! Hosts the dashboard bundle and inspects its assets.
//!
//! Run with: cargo run -- serve
//!
//! Environment variables (overridden by flags):
//! - `ADMINDASH_HOST`, `ADMINDASH_PORT`
//! - `ADMINDASH_DIST_DIR`, `ADMINDASH_ASSETS_DIR`
//! - `ADMINDASH_LOG_LEVEL`, `ADMINDASH_LOG_FORMAT`
//! - `RUST_LOG`: takes precedence over the configured level

use admindash::assets::AssetReport;
use admindash::config::{generate_default_config, Config, LoggingConfig};
use admindash::model::Dashboard;
use admindash::server::{serve, AppState};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "admindash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Admin dashboard host")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Built frontend directory
        #[arg(long)]
        dist: Option<PathBuf>,
        /// Image asset directory
        #[arg(long)]
        assets: Option<PathBuf>,
    },

    /// List the images the page expects and flag missing ones
    Assets {
        /// Asset directory (default: from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Print the dashboard content as JSON
    Snapshot,

    /// Print a default config file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config loading logs through a stderr subscriber until the configured
    // one is installed
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .finish();
    let mut config = tracing::subscriber::with_default(bootstrap, || match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Config::load_default().context("loading config"),
    })?;

    init_logging(&config.logging);

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        dist: None,
        assets: None,
    }) {
        Commands::Serve {
            host,
            port,
            dist,
            assets,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist) = dist {
                config.server.dist_dir = dist;
            }
            if let Some(assets) = assets {
                config.server.assets_dir = assets;
            }

            tracing::info!("Starting Admindash v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Bundle directory: {:?}", config.server.dist_dir);
            tracing::info!("Asset directory: {:?}", config.server.assets_dir);

            let dashboard = Dashboard::fixture();
            dashboard.validate().context("dashboard content does not match its layout")?;

            serve(AppState::with_dashboard(config.server, dashboard)).await?;
        }

        Commands::Assets { dir } => {
            let dir = dir.unwrap_or(config.server.assets_dir);
            let report = AssetReport::scan(&dir, &Dashboard::fixture());

            for line in report.lines() {
                println!("{}", line);
            }

            if !report.is_complete() {
                anyhow::bail!("{} asset(s) missing from {}", report.missing().len(), dir.display());
            }
            println!("All assets present in {}", dir.display());
        }

        Commands::Snapshot => {
            let json = serde_json::to_string_pretty(&Dashboard::fixture())?;
            println!("{}", json);
        }

        Commands::InitConfig => {
            print!("{}", generate_default_config());
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("admindash={},tower_http={}", logging.level, logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    // stderr keeps `snapshot` and `init-config` output clean on stdout
    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
