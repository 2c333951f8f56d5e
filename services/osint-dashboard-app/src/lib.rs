//! OSINT Warning Dashboard - Leptos frontend
//!
//! Indicator list and detail pages that talk to the indicator API from the browser.

pub mod api;
pub mod app;
pub mod components;
pub mod state;

pub use app::App;

/// Hydration entry point for WASM client
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    leptos::mount::hydrate_body(App);
}
