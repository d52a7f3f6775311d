//! # client
//!
//! Leptos + WASM frontend for the session-gated application shell.
//!
//! This crate contains the session store and oracle (`state`), the route
//! table and route guard (`routes`), the navigation shell and auth form
//! (`components`), route-level pages, and the REST helper that talks to the
//! host's session issuer.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: install panic and log hooks, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
