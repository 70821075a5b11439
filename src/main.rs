//! QueueLeaf Client
//!
//! Browser client for the QueueLeaf walk-in queue service, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - QR-linked join form for customers
//! - Live ticket status with called-state alerts
//! - Staff dashboard and per-queue management
//! - Analytics charts over historical ticket data
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic (queue ordering, ETA computation, position
//! assignment) lives in the QueueLeaf backend; this client talks to it over
//! HTTP with JSON bodies and cookie credentials.

use leptos::*;

mod alerts;
mod api;
mod app;
mod components;
mod i18n;
mod model;
mod pages;
mod session;
mod state;
mod stats;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
