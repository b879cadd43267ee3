//! # client
//!
//! Leptos + WASM frontend for the Bulkee login screen.
//!
//! This crate contains the login and home pages, the login form state and
//! its validation schema, the shared theme context, and the presentational
//! components (background, icons, form rows, theme menu). The `server` crate
//! renders it with the `ssr` feature; the browser bundle is built with
//! `hydrate`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the client to the server-rendered document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
