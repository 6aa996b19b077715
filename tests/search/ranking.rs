//! Ranking: every record scored, survivors ordered best first.

use super::common::{assert_sorted_by_score, records, store_of, texts};
use docsift::{rank, IndexStore, Record};

#[test]
fn test_prefix_bias() {
    let store = store_of(&["grape", "apple"]);
    let ranked = store.search("a");

    assert_eq!(texts(&ranked), ["apple", "grape"]);
    assert_eq!(ranked[0].score, 256);
    assert_eq!(ranked[1].score, 254);
}

#[test]
fn test_non_matching_records_are_dropped() {
    let store = store_of(&["abc", "xyz", "zyx"]);
    let ranked = store.search("xyz");
    assert_eq!(texts(&ranked), ["xyz"]);
}

#[test]
fn test_ranking_is_sorted_descending() {
    let store = store_of(&[
        "sprint",
        "print",
        "a print statement",
        "Print",
        "paint",
        "p r i n t",
    ]);
    let ranked = store.search("print");
    assert_eq!(ranked.len(), 5);
    assert_sorted_by_score(&ranked);
}

#[test]
fn test_equal_scores_keep_index_order() {
    let store = store_of(&["Print", "print", "PRINT"]);
    let ranked = store.search("print");
    assert_eq!(texts(&ranked), ["Print", "print", "PRINT"]);
    assert!(ranked.iter().all(|m| m.score == ranked[0].score));
}

#[test]
fn test_match_url_is_file_hash_id() {
    let store = IndexStore::with_records(vec![Record::new("Allocator", "memory.html", "allocator")]);
    let ranked = store.search("alloc");
    assert_eq!(ranked[0].url, "memory.html#allocator");
}

#[test]
fn test_degraded_record_url() {
    let store = IndexStore::with_records(vec![Record::new("orphan", "", "")]);
    assert_eq!(store.search("orphan")[0].url, "#");
}

#[test]
fn test_negative_scores_are_discarded() {
    let deep = format!("{}target", " ".repeat(500));
    let index = records(&[&deep, "target"]);
    let ranked = rank("target", &index);
    assert_eq!(texts(&ranked), ["target"]);
}

#[test]
fn test_empty_index_ranks_nothing() {
    assert!(rank("anything", &[]).is_empty());
}

#[test]
fn test_ranking_does_not_mutate_index() {
    let store = store_of(&["b", "a"]);
    let before = store.records();
    let _ = store.search("a");
    assert_eq!(store.records(), before);
}
