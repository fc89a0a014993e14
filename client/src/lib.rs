//! # pagebuilder-client
//!
//! Leptos + WASM frontend for the drag-and-drop page builder.
//!
//! This crate contains the builder page, its sidebar and preview components,
//! and the reactive state wrapping `pagebuilder-model`. The server renders the
//! same components through the `ssr` feature; the browser hydrates them
//! through the `hydrate` feature.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the existing logger stays.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
