//! # foodhub-portal
//!
//! Leptos + WASM frontend gating the restaurant partner, shipper and
//! consumer areas of FoodHub on locally stored authorization state.
//!
//! Guards in `components` read the status store from `state`, classify it,
//! and either render their nested routes or replace the location with the
//! next onboarding step. Everything else is presentational.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then mount the app.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(config::log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("FoodHub portal starting");
    leptos::mount::mount_to_body(app::App);
}
