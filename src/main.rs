//! PodStudio
//!
//! Podcast project manager built with Leptos (WASM).
//!
//! # Features
//!
//! - Project creation and listing
//! - Content ingestion from RSS, YouTube, or file uploads
//! - In-browser transcript viewer and editor
//! - Upload records mirrored to browser localStorage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in reactive signals; the only external
//! interface is a single localStorage key holding the upload records.

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
