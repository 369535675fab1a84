//! # roombook
//!
//! Leptos + WASM front end for booking meeting rooms.
//!
//! This crate contains pages, components, application state, and the REST
//! clients for the room directory and slot endpoints. The `ssr` feature lets a
//! host server render [`app::shell`]; the `hydrate` feature builds the browser
//! bundle whose entry point is [`hydrate`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
