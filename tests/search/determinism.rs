//! Same index, same query, same answer: every time, from every store.

use super::common::{fixture_records, fixture_store, texts};
use docsift::IndexStore;

const QUERIES: &[&str] = &["p", "print", "str", "Ab", "a", "hw", "zzz", ""];

#[test]
fn test_repeated_searches_agree() {
    let store = fixture_store();
    for query in QUERIES {
        let first = store.search(query);
        for run in 0..10 {
            assert_eq!(
                store.search(query),
                first,
                "Run {}: ranking for {:?} changed",
                run,
                query
            );
        }
    }
}

#[test]
fn test_fresh_stores_agree() {
    for query in QUERIES {
        let a = fixture_store().results(query);
        let b = IndexStore::with_records(fixture_records()).results(query);
        assert_eq!(texts(&a), texts(&b), "Different stores disagree on {:?}", query);
    }
}
