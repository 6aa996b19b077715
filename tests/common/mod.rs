//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::{parse_records, IndexStore, Record};
use std::fs;
use std::sync::LazyLock;

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_record, make_record_in, payload, records};

// ============================================================================
// FIXTURES
// ============================================================================

/// Path to the docs-site fixture index.
pub const FIXTURE_INDEX: &str = "fixtures/search.json";

/// Lazy-loaded fixture bytes (avoids repeated disk reads in tests).
static FIXTURE_BYTES: LazyLock<Vec<u8>> =
    LazyLock::new(|| fs::read(FIXTURE_INDEX).expect("Failed to read fixture index"));

/// Raw fixture payload.
pub fn fixture_bytes() -> Vec<u8> {
    FIXTURE_BYTES.clone()
}

/// Parsed fixture records, in file order.
pub fn fixture_records() -> Vec<Record> {
    parse_records(&FIXTURE_BYTES).expect("Failed to parse fixture index")
}

/// A store already loaded with the fixture.
pub fn fixture_store() -> IndexStore {
    IndexStore::with_records(fixture_records())
}

/// A store already loaded with records labelled `texts`.
pub fn store_of(texts: &[&str]) -> IndexStore {
    IndexStore::with_records(records(texts))
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Labels of a result list, in order.
pub fn texts(matches: &[docsift::Match]) -> Vec<&str> {
    matches.iter().map(|m| m.text.as_str()).collect()
}

/// Scores must never increase down the list.
pub fn assert_sorted_by_score(matches: &[docsift::Match]) {
    for pair in matches.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results not sorted: {} ({}) before {} ({})",
            pair[0].text,
            pair[0].score,
            pair[1].text,
            pair[1].score
        );
    }
}
