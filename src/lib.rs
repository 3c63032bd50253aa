//! # edusmart-client
//!
//! Leptos + WASM frontend for the EduSmart learning platform. Replaces the
//! React `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, and the auth
//! service HTTP client. The session store in `state::session` is the single
//! source of truth for "who is logged in"; `components::protected_route`
//! gates every protected page on it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
