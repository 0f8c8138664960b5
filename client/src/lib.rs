//! # atv-client
//!
//! Leptos + WASM front-end for the AUTO TRADE VIP landing page and member
//! dashboard. The same crate renders on the server (`ssr`) and hydrates in
//! the browser (`hydrate`).
//!
//! `state` holds browser-free state machines, `components` and `pages`
//! render them, `util` wraps timers and DOM access, and `net` talks to the
//! auth endpoints.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        leptos::logging::warn!("console logger already initialised");
    }
    log::info!("{} client hydrating", catalog::PRODUCT_NAME);
    leptos::mount::hydrate_body(app::App);
}
