//! # skillsync-client
//!
//! Leptos + WASM frontend for the SkillSync mentorship application.
//!
//! This crate contains pages, components, the client-side store, the REST
//! client with bearer/refresh handling, and the async action handlers that
//! connect them. The `ssr` build is rendered by the root Axum host; the
//! `hydrate` build runs in the browser.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
