//! # barberbook-client
//!
//! Leptos + WASM front end for BarberBook. Routes, pages and the
//! `ProtectedRoute` wrapper live here, together with the browser side of the
//! session core: the HTTP identity adapter, the `localStorage` token cache and
//! the bridge from the session store into a reactive signal.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating barberbook client");
    leptos::mount::hydrate_body(app::App);
}
