//! StoryCrafter Dashboard
//!
//! Content-generation dashboard for video creators built with Leptos (WASM).
//!
//! # Features
//!
//! - Generated content library (scripts, titles, thumbnail prompts, SEO tags)
//! - One-form AI generation with save/discard
//! - Idea board with drag-and-drop reordering, persisted locally
//! - Text-to-speech playback and thumbnail previews
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the StoryCrafter API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
