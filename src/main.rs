//! Mood Tracker
//!
//! Calendar-based mood journaling client built with Leptos (WASM).
//!
//! # Features
//!
//! - Month calendar with per-day mood markers
//! - Three-tier emotion drill-down for new entries
//! - Trend charts aggregated by primary emotion
//! - Token-authenticated access to the mood journal API
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the mood journal API over HTTP; all
//! persistence and authentication live on the server.

use leptos::*;

mod api;
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
