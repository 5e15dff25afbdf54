//! GiftLink - user registration client
//!
//! Collects a new user's details, registers them with the authentication
//! service, and signs them in on success. Built with Leptos and WebAssembly.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
