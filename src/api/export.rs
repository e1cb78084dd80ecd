//! Save operation for the WASM API
//!
//! Normalizes the current document (blank-entry pruning plus id
//! assignment) and hands the view layer everything it needs to trigger
//! the download: the pretty-printed JSON, the target filename, and the
//! pruned count for the save notice. The blob/anchor download dance
//! itself stays in JavaScript.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::api::core::VerseEditor;
use crate::api::helpers::serialize;
use crate::normalize::{normalize, to_pretty_json};
use crate::{wasm_error, wasm_info, wasm_warn};

/// Result of a save operation
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveResult {
    /// Pretty-printed canonical array, ready to download
    pub json: String,

    /// Download filename (the loaded name, or "mappings.json")
    pub file_name: String,

    /// Records written
    pub count: usize,

    /// Blank records dropped
    pub pruned: usize,
}

#[wasm_bindgen]
impl VerseEditor {
    /// Export the current document as the canonical JSON array
    ///
    /// An empty document yields the soft "Nothing to save." error, which
    /// the view reports as a notice rather than producing a file.
    ///
    /// # Returns
    /// A SaveResult object: `{ json, file_name, count, pruned }`
    #[wasm_bindgen(js_name = saveJson)]
    pub fn save_json(&self) -> Result<JsValue, JsValue> {
        wasm_info!("saveJson called");

        if self.state.document.is_empty() {
            wasm_warn!("saveJson with empty document");
            return Err(JsValue::from_str("Nothing to save."));
        }

        let normalized = normalize(self.state.document.records());
        let json = to_pretty_json(&normalized.records).map_err(|e| {
            wasm_error!("JSON serialization error: {}", e);
            JsValue::from_str(&format!("JSON serialization error: {}", e))
        })?;

        wasm_info!(
            "  {} record(s) written, {} blank record(s) pruned, {} bytes",
            normalized.records.len(),
            normalized.pruned,
            json.len()
        );

        let result = SaveResult {
            json,
            file_name: self.state.save_file_name().to_string(),
            count: normalized.records.len(),
            pruned: normalized.pruned,
        };

        wasm_info!("saveJson completed successfully");
        serialize(&result, "SaveResult serialization error")
    }
}
