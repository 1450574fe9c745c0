//! # client
//!
//! Leptos + WASM storefront UI for the Chaos Theory collection.
//!
//! This crate contains the routed pages, the section components, page state,
//! and the HTTP calls to the storefront API. Motion math comes from the
//! `gallery` crate; wire types come from `catalog`.

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
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
