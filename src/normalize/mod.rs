//! Save-time normalization of the record sequence
//!
//! Transforms a document snapshot into the canonical output array in two
//! ordered steps: completely blank records are pruned (and counted), then
//! ids are assigned in a single left-to-right pass over the survivors.
//!
//! The pass keeps a running `max_seen` that only ever reflects numeric
//! ids already walked past, so an earlier blank id can receive a lower
//! number than a later explicit id. That ordering-dependent behavior is
//! intentional and pinned by tests.

use serde::{Deserialize, Serialize};

use crate::models::VerseRecord;

/// An assigned id in the output: numeric when the source id parsed as a
/// finite number (or was auto-assigned), the original text otherwise
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum MapId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl MapId {
    /// Numeric id, collapsing integral values so they serialize without
    /// a fractional part ("6", not "6.0")
    pub fn from_number(n: f64) -> Self {
        if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
            MapId::Int(n as i64)
        } else {
            MapId::Float(n)
        }
    }
}

/// One entry of the canonical output array
///
/// `notes` is omitted from the JSON entirely when absent, never written
/// as an empty string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportRecord {
    pub map_id: MapId,
    pub sanskrit: String,
    pub english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Result of normalization: the output array plus how many blank records
/// were dropped on the way
#[derive(Clone, Debug, PartialEq)]
pub struct Normalized {
    pub records: Vec<ExportRecord>,
    pub pruned: usize,
}

/// A record is blank iff all four fields trim to empty
pub fn is_blank(record: &VerseRecord) -> bool {
    record.map_id.trim().is_empty()
        && record.sanskrit.trim().is_empty()
        && record.english.trim().is_empty()
        && record.notes.trim().is_empty()
}

/// Parse a trimmed id as a finite decimal number
///
/// Non-finite spellings ("inf", "NaN") do not count as numeric, and
/// neither do hex literals; those ids pass through as text.
fn parse_numeric_id(trimmed: &str) -> Option<f64> {
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Build the canonical output array from a document snapshot
///
/// Pure: the snapshot is never mutated, and identical input yields
/// identical output.
pub fn normalize(records: &[VerseRecord]) -> Normalized {
    let survivors: Vec<&VerseRecord> = records.iter().filter(|r| !is_blank(r)).collect();
    let pruned = records.len() - survivors.len();

    // Single left-to-right pass. Blank ids get max_seen + 1, where
    // max_seen reflects only the numeric ids already walked past, not
    // the global maximum of the whole set.
    let mut max_seen = 0.0_f64;
    let mut out = Vec::with_capacity(survivors.len());

    for record in survivors {
        let trimmed = record.map_id.trim();
        let map_id = if trimmed.is_empty() {
            max_seen += 1.0;
            MapId::from_number(max_seen)
        } else if let Some(n) = parse_numeric_id(trimmed) {
            max_seen = max_seen.max(n);
            MapId::from_number(n)
        } else {
            MapId::Text(record.map_id.clone())
        };

        out.push(ExportRecord {
            map_id,
            sanskrit: record.sanskrit.clone(),
            english: record.english.clone(),
            notes: match record.notes.trim() {
                "" => None,
                _ => Some(record.notes.clone()),
            },
        });
    }

    Normalized {
        records: out,
        pruned,
    }
}

/// Serialize the output array with stable 2-space indentation
pub fn to_pretty_json(records: &[ExportRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(map_id: &str, sanskrit: &str, english: &str, notes: &str) -> VerseRecord {
        VerseRecord {
            map_id: map_id.to_string(),
            sanskrit: sanskrit.to_string(),
            english: english.to_string(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_is_blank_ignores_whitespace() {
        assert!(is_blank(&record("", "  ", "\t", "\n")));
        assert!(!is_blank(&record("", "", "", "x")));
    }

    #[test]
    fn test_parse_numeric_id_accepts_decimal_forms() {
        assert_eq!(parse_numeric_id("5"), Some(5.0));
        assert_eq!(parse_numeric_id("-2.5"), Some(-2.5));
        assert_eq!(parse_numeric_id("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_numeric_id_rejects_non_finite_and_text() {
        assert_eq!(parse_numeric_id("inf"), None);
        assert_eq!(parse_numeric_id("NaN"), None);
        assert_eq!(parse_numeric_id("0x1A"), None);
        assert_eq!(parse_numeric_id("alpha-1"), None);
    }

    #[test]
    fn test_map_id_integral_collapses_to_int() {
        assert_eq!(MapId::from_number(6.0), MapId::Int(6));
        assert_eq!(MapId::from_number(-3.0), MapId::Int(-3));
        assert_eq!(MapId::from_number(3.5), MapId::Float(3.5));
    }

    #[test]
    fn test_normalize_is_pure() {
        let input = vec![record("", "स", "a", ""), record("", "", "", "")];
        let first = normalize(&input);
        let second = normalize(&input);
        assert_eq!(first, second);
        assert_eq!(input[0].map_id, "");
    }
}
