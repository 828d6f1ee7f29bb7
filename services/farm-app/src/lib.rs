//! Farm App - Leptos frontend
//!
//! Browser UI for registering, logging in and keeping batch records.
//! Each page of the site loads this bundle and renders the component for
//! its own path.

pub mod app;
pub mod browser;
pub mod components;
pub mod view;

pub use app::App;

/// WASM entry point
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    leptos::mount::mount_to_body(App);
}
