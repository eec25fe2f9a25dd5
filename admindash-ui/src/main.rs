//! Admindash Frontend
//!
//! Admin dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sales overview with period filter, bar chart and revenue tiles
//! - Listing and user overview cards
//! - Featured listing carousels
//! - Budgeting promo modal (closes on Escape or backdrop click)
//! - Calendar side panel with month navigation
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Content, formatting and state transitions come from the
//! `admindash` library; this crate binds them to signals and the DOM.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
