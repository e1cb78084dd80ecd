//! Verse Mapping Editor WASM API
//!
//! This module provides the JavaScript-facing API for the verse mapping
//! editor. It includes shared utilities for serialization, validation,
//! and error handling, as well as the editor controller itself.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation, error handling, and logging
//! - `core`: The VerseEditor controller (load, insert, delete, field edits, snapshots)
//! - `export`: The save operation (normalization + pretty JSON)

pub mod core;
pub mod export;
pub mod helpers;

// Re-export the public API types
pub use core::VerseEditor;
pub use export::SaveResult;
