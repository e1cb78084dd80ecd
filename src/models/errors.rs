//! Error types for document loading
//!
//! Loading is all-or-nothing: any of these errors leaves the previously
//! loaded document untouched.

use thiserror::Error;

/// Errors produced while parsing an uploaded file into a document
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// Input is not well-formed JSON
    #[error("Error parsing JSON: {0}")]
    InvalidJson(String),

    /// Top-level JSON value is something other than an array
    #[error("JSON must be an array, got {0}")]
    NotAnArray(&'static str),
}
