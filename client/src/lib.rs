//! # www-client
//!
//! Leptos + WASM frontend for the Darklang marketing site.
//!
//! This crate contains the pages, layout components, the signup view-model,
//! and the account-service client. The `ssr` feature renders it inside the
//! server binary; the `hydrate` feature builds the browser bundle that takes
//! over routing after the first load.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
