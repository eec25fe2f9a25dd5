//! # Admindash
//!
//! Admin dashboard for a property marketplace: a sales overview with a bar
//! chart and revenue tiles, listing and user summaries, featured-listing
//! carousels, a budgeting promo modal and a calendar side panel.
//!
//! ## Modules
//!
//! - [`model`]: The dashboard content and its layout checks
//! - [`format`]: Currency, compact count and trend formatting
//! - [`chart`]: Grouped bar chart geometry
//! - [`state`]: View state (filter, carousels, overlays, calendar)
//! - [`assets`]: Image files the page expects
//! - [`config`]: Host configuration (feature `server`)
//! - [`server`]: Static file host built with Axum (feature `server`)
//!
//! The library builds for `wasm32` with default features off; the
//! `admindash-ui` crate renders it with Leptos.
//!
//! ## Quick Start
//!
//! ```rust
//! use admindash::format::format_naira;
//! use admindash::model::Dashboard;
//! use admindash::state::CarouselState;
//!
//! let dashboard = Dashboard::fixture();
//! dashboard.validate().expect("fixture matches layout");
//!
//! assert_eq!(format_naira(dashboard.stats[0].amount), "₦120,000,000.00");
//!
//! let spec = &dashboard.carousels[0];
//! let mut carousel = CarouselState::for_spec(spec).unwrap();
//! carousel.next();
//! assert_eq!(carousel.image_src(spec.slug), "/most-clicked-2.jpg");
//! ```

pub mod assets;
pub mod chart;
pub mod error;
pub mod format;
pub mod model;
pub mod state;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use chart::ChartLayout;
pub use error::{DashboardError, DashboardResult};
pub use model::{Dashboard, NavSection};
pub use state::{BudgetModal, CalendarPanel, CalendarState, CarouselState, ModalEvent, Period, PeriodFilter};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};

#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};
