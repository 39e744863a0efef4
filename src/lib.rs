//! Get Helped - marketing site for a local help service
//!
//! Server-rendered with Leptos and hydrated in the browser. Page behaviour
//! (navigation menu, scroll effects, FAQ accordion, contact form lifecycle)
//! is modelled in [`core`] without touching the DOM; [`ui`] wires it to the page.

#![recursion_limit = "4096"]

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
