//! Editor state management
//!
//! This module contains the EditorState struct which represents the
//! complete state of the editor: the document, the loaded filename, and
//! the deletion queued behind the view's confirmation modal.
//!
//! This is the WASM-owned source of truth for all editor state.

use serde::{Deserialize, Serialize};

use super::core::Document;

/// Fallback download name when no file has been loaded
pub const DEFAULT_SAVE_NAME: &str = "mappings.json";

/// Complete editor state (WASM-owned source of truth)
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct EditorState {
    /// The document being edited
    pub document: Document,

    /// Filename of the loaded file, used as the default save name
    pub file_name: Option<String>,

    /// Index queued for deletion, pending modal confirmation
    pub pending_delete: Option<usize>,
}

impl EditorState {
    /// Create a fresh state with no document loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all state with a freshly loaded document
    ///
    /// Discards any unsaved prior state, including a pending deletion.
    pub fn load(&mut self, document: Document, file_name: String) {
        self.document = document;
        self.file_name = Some(file_name);
        self.pending_delete = None;
    }

    /// Filename to save under: the loaded name, or the default
    pub fn save_file_name(&self) -> &str {
        match self.file_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_SAVE_NAME,
        }
    }

    /// Queue a record index for deletion
    pub fn request_delete(&mut self, position: usize) {
        self.pending_delete = Some(position);
    }

    /// Drop the queued deletion (modal dismissed)
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Hand the queued index to the confirm path, clearing the queue
    pub fn take_pending_delete(&mut self) -> Option<usize> {
        self.pending_delete.take()
    }
}
