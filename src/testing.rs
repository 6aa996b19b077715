//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Record;

/// Create a record whose anchor is derived from its label.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(text: &str) -> Record {
    Record::new(text, "index.html", slug(text))
}

/// Create a record pointing at a specific page.
pub fn make_record_in(text: &str, file: &str) -> Record {
    Record::new(text, file, slug(text))
}

/// Build an index from labels, in order.
pub fn records(texts: &[&str]) -> Vec<Record> {
    texts.iter().map(|text| make_record(text)).collect()
}

/// Serialize records as a `search.json` payload.
pub fn payload(records: &[Record]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

fn slug(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}
