//! # labsite-client
//!
//! Leptos + WASM front end for the research-group website.
//!
//! The core is the session gate: a persisted token store, a single API
//! gateway that attaches credentials and clears the session on 401, the
//! session manager that owns login and logout, and a pure route guard.
//! Pages and components are a thin shell over that core.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
