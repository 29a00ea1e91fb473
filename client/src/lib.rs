//! Voyage-management frontend.
//!
//! ARCHITECTURE
//! ============
//! `pages` own route-level orchestration, `components` render the widgets,
//! `state` holds plain state containers with pure transitions, `util` keeps
//! renderer-free helpers, and `net` wraps the REST boundary. Browser-only
//! behavior is gated behind the `hydrate` feature; the `ssr` feature drives
//! server rendering through `leptos_axum`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the generated WASM loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
