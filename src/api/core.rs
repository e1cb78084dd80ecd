//! JavaScript-facing editor API
//!
//! This module defines the VerseEditor controller class that owns all
//! editor state (document, loaded filename, pending deletion). The view
//! layer forwards user intents — file text, button clicks, field edits —
//! and re-renders from snapshots; it never mutates the record sequence
//! directly.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, validate_index, validation_error};
use crate::models::{Document, EditorState, Field};
use crate::{wasm_error, wasm_info, wasm_log};

/// The editor controller (WASM-owned source of truth)
///
/// Constructed once at app start; every load replaces its state
/// wholesale.
#[wasm_bindgen]
pub struct VerseEditor {
    pub(crate) state: EditorState,
}

#[wasm_bindgen]
impl VerseEditor {
    /// Create an editor with no document loaded
    #[wasm_bindgen(constructor)]
    pub fn new() -> VerseEditor {
        wasm_info!("VerseEditor created");
        VerseEditor {
            state: EditorState::new(),
        }
    }

    /// Load a JSON file into the editor, replacing all current state
    ///
    /// Fails unless `text` parses as a JSON array; each element's fields
    /// are coerced to strings. On error the previous document is left
    /// untouched.
    ///
    /// # Returns
    /// The number of records loaded (for the "Loaded N verses" notice)
    #[wasm_bindgen(js_name = loadJson)]
    pub fn load_json(&mut self, text: &str, file_name: &str) -> Result<usize, JsValue> {
        wasm_info!("loadJson called: file='{}', {} bytes", file_name, text.len());

        let document = Document::from_json(text).map_err(|e| {
            wasm_error!("Load error: {}", e);
            JsValue::from_str(&e.to_string())
        })?;

        let count = document.len();
        self.state.load(document, file_name.to_string());

        wasm_info!("loadJson completed: {} record(s)", count);
        Ok(count)
    }

    /// Insert an empty verse at `position` (0..=count), shifting later
    /// verses right
    ///
    /// `position == count` appends, which is the toolbar "Add verse"
    /// path.
    ///
    /// # Returns
    /// The new record count
    #[wasm_bindgen(js_name = insertVerse)]
    pub fn insert_verse(&mut self, position: usize) -> Result<usize, JsValue> {
        wasm_info!("insertVerse called: position={}", position);

        validate_index(position, self.state.document.len() + 1, "Insert")
            .map_err(validation_error)?;

        self.state.document.insert_at(position);
        Ok(self.state.document.len())
    }

    /// Queue `position` for deletion pending the view's confirmation
    /// modal
    #[wasm_bindgen(js_name = requestDelete)]
    pub fn request_delete(&mut self, position: usize) -> Result<(), JsValue> {
        wasm_info!("requestDelete called: position={}", position);

        validate_index(position, self.state.document.len(), "Delete")
            .map_err(validation_error)?;

        self.state.request_delete(position);
        Ok(())
    }

    /// Drop the queued deletion (modal dismissed)
    #[wasm_bindgen(js_name = cancelDelete)]
    pub fn cancel_delete(&mut self) {
        wasm_info!("cancelDelete called");
        self.state.cancel_delete();
    }

    /// Delete the queued record, shifting later verses left
    ///
    /// Errors when nothing is queued (the modal confirmed without a
    /// pending request).
    ///
    /// # Returns
    /// The new record count
    #[wasm_bindgen(js_name = confirmDelete)]
    pub fn confirm_delete(&mut self) -> Result<usize, JsValue> {
        wasm_info!("confirmDelete called");

        let position = self
            .state
            .take_pending_delete()
            .ok_or_else(|| validation_error("No deletion pending"))?;

        self.state.document.delete_at(position).ok_or_else(|| {
            validation_error(format!("Delete index {} out of bounds", position))
        })?;

        wasm_info!("  Deleted record at {}", position);
        Ok(self.state.document.len())
    }

    /// Delete the record at `position` directly, without the
    /// confirmation queue
    ///
    /// # Returns
    /// The new record count
    #[wasm_bindgen(js_name = deleteVerse)]
    pub fn delete_verse(&mut self, position: usize) -> Result<usize, JsValue> {
        wasm_info!("deleteVerse called: position={}", position);

        validate_index(position, self.state.document.len(), "Delete")
            .map_err(validation_error)?;

        self.state.document.delete_at(position);
        Ok(self.state.document.len())
    }

    /// Overwrite one field of one record
    ///
    /// Accepts any string, including empty; `field` is the JS-facing
    /// name ("map_id", "sanskrit", "english", "notes").
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&mut self, position: usize, field: &str, value: &str) -> Result<(), JsValue> {
        wasm_log!("setField called: position={}, field='{}'", position, field);

        let field = Field::from_name(field)
            .ok_or_else(|| validation_error(format!("Unknown field: '{}'", field)))?;

        validate_index(position, self.state.document.len(), "Edit")
            .map_err(validation_error)?;

        self.state.document.set_field(position, field, value);
        Ok(())
    }

    /// Current record sequence for rendering
    ///
    /// The returned array is a copy; edits must come back through the
    /// mutation methods above.
    pub fn snapshot(&self) -> Result<js_sys::Array, JsValue> {
        let result = js_sys::Array::new();
        for record in self.state.document.records() {
            let record_js = serialize(record, "Snapshot serialization error")?;
            result.push(&record_js);
        }
        Ok(result)
    }

    /// Number of records currently loaded (for the file-info line)
    #[wasm_bindgen(js_name = verseCount)]
    pub fn verse_count(&self) -> usize {
        self.state.document.len()
    }

    /// Filename to save under: the loaded name, or "mappings.json"
    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(&self) -> String {
        self.state.save_file_name().to_string()
    }
}

impl Default for VerseEditor {
    fn default() -> Self {
        Self::new()
    }
}
