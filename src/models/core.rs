//! Core data structures for the verse mapping editor
//!
//! This module defines the VerseRecord entry and the Document that owns
//! the ordered record sequence. The sequence order is the display and
//! persisted order; all mutation goes through Document methods and the
//! view layer only ever reads snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::LoadError;

/// One bilingual verse entry
///
/// All four fields are free-form text while in memory. `map_id` is the
/// user-facing ordinal but is not guaranteed unique or numeric; an empty
/// `notes` means "absent" and is dropped from the export.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VerseRecord {
    #[serde(default)]
    pub map_id: String,

    #[serde(default)]
    pub sanskrit: String,

    #[serde(default)]
    pub english: String,

    #[serde(default)]
    pub notes: String,
}

impl VerseRecord {
    /// Create an all-empty record (the shape inserted between existing verses)
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The four editable fields of a record
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    MapId,
    Sanskrit,
    English,
    Notes,
}

impl Field {
    /// Parse the JS-facing field name carried on the input elements
    /// ("map_id", "sanskrit", "english", "notes")
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "map_id" => Some(Field::MapId),
            "sanskrit" => Some(Field::Sanskrit),
            "english" => Some(Field::English),
            "notes" => Some(Field::Notes),
            _ => None,
        }
    }

    /// The JS-facing field name
    pub fn name(&self) -> &'static str {
        match self {
            Field::MapId => "map_id",
            Field::Sanskrit => "sanskrit",
            Field::English => "english",
            Field::Notes => "notes",
        }
    }
}

/// Ordered sequence of verse records
///
/// Index positions are not stable identifiers (they shift on
/// insert/delete); only `map_id` is user-facing, and even that is not
/// guaranteed unique.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Document {
    records: Vec<VerseRecord>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse uploaded file text into a document
    ///
    /// The top-level value must be a JSON array; each element's four
    /// fields are coerced to strings, with missing/null fields becoming
    /// empty. Elements that are not objects load as all-empty records.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| LoadError::InvalidJson(e.to_string()))?;

        let items = match value {
            Value::Array(items) => items,
            other => return Err(LoadError::NotAnArray(json_type_name(&other))),
        };

        let records = items.iter().map(record_from_value).collect();
        Ok(Self { records })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records are loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Read-only view of the record sequence, for rendering and export
    pub fn records(&self) -> &[VerseRecord] {
        &self.records
    }

    /// Insert an all-empty record at `position`, shifting later records
    /// right. Positions past the end clamp to an append; the clamped
    /// position actually used is returned.
    pub fn insert_at(&mut self, position: usize) -> usize {
        let position = position.min(self.records.len());
        self.records.insert(position, VerseRecord::empty());
        position
    }

    /// Remove and return the record at `position`, shifting later records
    /// left. Out-of-range positions are a no-op returning `None`.
    pub fn delete_at(&mut self, position: usize) -> Option<VerseRecord> {
        if position < self.records.len() {
            Some(self.records.remove(position))
        } else {
            None
        }
    }

    /// Overwrite one field of the record at `position`. Any string is
    /// accepted, including empty; returns `false` for out-of-range
    /// positions without touching the sequence.
    pub fn set_field(&mut self, position: usize, field: Field, value: &str) -> bool {
        match self.records.get_mut(position) {
            Some(record) => {
                match field {
                    Field::MapId => record.map_id = value.to_string(),
                    Field::Sanskrit => record.sanskrit = value.to_string(),
                    Field::English => record.english = value.to_string(),
                    Field::Notes => record.notes = value.to_string(),
                }
                true
            }
            None => false,
        }
    }
}

fn record_from_value(value: &Value) -> VerseRecord {
    VerseRecord {
        map_id: coerce_field(value.get("map_id")),
        sanskrit: coerce_field(value.get("sanskrit")),
        english: coerce_field(value.get("english")),
        notes: coerce_field(value.get("notes")),
    }
}

/// Field coercion on load: strings pass through, numbers and booleans
/// take their display form, null/missing become empty, and nested
/// values keep their compact JSON text.
fn coerce_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
