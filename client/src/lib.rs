//! # client
//!
//! Leptos + WASM front-end for the Vida Plus hospital administration console.
//!
//! One generic resource panel (table, edit form, delete, create form) is
//! instantiated per entity; all request/response decisions live in the
//! `records` crate and this crate only binds them to the DOM and `fetch`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
