//! Bilingual Verse Mapping Editor WASM Module
//!
//! This is the main WASM module for the verse mapping editor. The Rust
//! side owns the record sequence and the save-time normalization;
//! JavaScript renders snapshots and forwards user intents.

pub mod api;
pub mod models;
pub mod normalize;

// Re-export commonly used types
pub use models::core::*;
pub use models::editor_state::EditorState;
pub use models::errors::LoadError;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Verse mapping editor WASM module initialized");
}
