//! # client
//!
//! Leptos + WASM frontend for Scera: app shell, routes, pages, and the
//! browser binding of the identity gateway. Auth state and route-guard policy
//! come from the `auth` crate; this crate renders them.

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
