//! # client
//!
//! Leptos + WASM front-end for the API probe console.
//!
//! One page of probe buttons, each exercising a single backend endpoint and
//! rendering the raw outcome. The request/status/error state machine, payload
//! types, and tone rules come from the `probes` crate; this crate adds the
//! browser transport (`gloo-net`) and the components.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already initialized: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
