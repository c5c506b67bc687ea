//! # client
//!
//! Leptos frontend for the Boards landing page and the per-tab auth provider.
//!
//! Built twice: with `ssr` for server rendering inside the `boards` binary,
//! and with `hydrate` as the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
