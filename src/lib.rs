//! # kiosk
//!
//! Leptos + WASM touchscreen directory for a shopping centre: category
//! browsing, an interactive floor map with markers, promotional offers, and
//! accessibility/localization controls.
//!
//! All state is local UI state. Marker derivation and selection live in the
//! `venue` crate; this crate owns localization copy, configuration, UI state
//! containers, browser glue, and the components that render them.

pub mod app;
pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger was already initialized");
    }
    log::info!("starting directory kiosk");
    leptos::mount::mount_to_body(app::App);
}
