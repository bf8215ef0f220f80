//! # client
//!
//! Leptos + WASM frontend of the TR Carrier admin console.
//!
//! This crate holds the login page, the guarded dashboards, and the browser
//! glue (storage scopes, REST calls) around the `session` crate, which owns
//! the token and authorization rules.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
