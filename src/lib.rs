//! # messaging
//!
//! Leptos floating chat widget for the Bigwise site: a toggle button that
//! opens a panel with a scripted welcome, lets the visitor type messages,
//! and answers each one with a canned reply after a short delay.
//!
//! The widget logic (`state`, `widget`, `util`) is renderer-free and driven
//! by injected clock and id sources; `components` is the Leptos layer on top.
//! The `server/` crate hosts the demo page via SSR.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;
pub mod widget;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
