//! Admissions Co-Pilot Dashboard
//!
//! Patient lead admissions dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Lead pipeline overview with per-stage counts and recent activity
//! - Lead creation, follow-up, and delete workflows
//! - System health, KPI, alert, and daily digest panels
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the admissions backend over HTTP and
//! holds a cached, wholesale-refreshed copy of the lead collection; the
//! backend owns persistent truth.

use leptos::*;

mod api;
mod app;
mod components;
mod model;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
