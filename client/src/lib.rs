//! # client
//!
//! Leptos + WASM admin console for SeaMoneeCredit staff.
//!
//! This crate contains the routed screens, shared components, per-screen
//! state, and the REST client for the admin API. Wire types and request
//! rules come from the `contract` crate so the CLI sees the same API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
