//! KinAtlas entry point.
//!
//! Mounts the root component to the document body; everything else lives in
//! the library crate.

use leptos::*;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <kinatlas::app::App /> });
}
