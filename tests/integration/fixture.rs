//! End-to-end queries against the docs-site fixture.

use super::common::{assert_sorted_by_score, fixture_records, fixture_store, texts};

#[test]
fn test_fixture_parses_every_record() {
    let records = fixture_records();
    assert_eq!(records.len(), 13);
    assert_eq!(records[0].url(), "modules/std.html#print");
}

#[test]
fn test_fixture_degraded_records_still_load() {
    let records = fixture_records();
    let orphan = records.iter().find(|r| r.text == "orphan label").unwrap();
    assert!(orphan.is_degraded());
    assert_eq!(orphan.url(), "#");

    let numeric = records.iter().find(|r| r.text == "numeric anchor").unwrap();
    assert_eq!(numeric.url(), "modules/misc.html#42");
}

#[test]
fn test_fixture_hello_world() {
    let store = fixture_store();
    let ranked = store.search("hw");
    assert_eq!(ranked[0].text, "Hello World");
    assert_eq!(ranked[0].score, 506);
    // Fuzzy-only: "hw" is not a literal substring of anything.
    assert!(store.results("hw").is_empty());
}

#[test]
fn test_fixture_double_filter() {
    let store = fixture_store();
    let ranked = store.search("Ab");
    assert!(texts(&ranked).contains(&"Alphabet"));
    assert_eq!(texts(&store.results("Ab")), ["Abacus"]);
}

#[test]
fn test_fixture_prefix_bias() {
    let store = fixture_store();
    let ranked = store.search("a");
    assert_sorted_by_score(&ranked);
    let apple = ranked.iter().position(|m| m.text == "apple").unwrap();
    let grape = ranked.iter().position(|m| m.text == "grape").unwrap();
    assert!(apple < grape);
}

#[test]
fn test_fixture_string_functions() {
    let store = fixture_store();
    let shown = store.results("string_");
    assert_eq!(texts(&shown), ["string_split_by", "string_to_s32"]);
    assert_eq!(shown[0].url, "modules/string.html#string_split_by");
}

#[test]
fn test_fixture_serializes_matches_as_json() {
    let store = fixture_store();
    let json = serde_json::to_value(store.results("print")).unwrap();
    assert_eq!(json[0]["text"], "print");
    assert_eq!(json[0]["url"], "modules/std.html#print");
    assert_eq!(json[0]["score"], 1270);
}
