//! # client
//!
//! Leptos + WASM frontend for the Parley group-chat application.
//!
//! This crate contains the login / group-list / chat pages, the client-side
//! route table and navigation guard, the credential store abstraction, and
//! the authenticated HTTP + WebSocket plumbing.

pub mod app;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
