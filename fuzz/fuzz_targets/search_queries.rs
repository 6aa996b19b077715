// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matching and ranking under arbitrary labels and queries.
//!
//! Scoring is total: any pair of strings gets a score or `None`, never a
//! panic. The pipeline on top must keep its ordering and filtering promises
//! no matter what the labels contain.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{fuzzy_cmp, rank, results, Record};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    labels: Vec<String>,
    query: String,
}

fuzz_target!(|input: Input| {
    let index: Vec<Record> = input
        .labels
        .iter()
        .map(|label| Record::new(label.as_str(), "page.html", "anchor"))
        .collect();

    for record in &index {
        let _ = fuzzy_cmp(&record.text, &input.query);
    }

    let ranked = rank(&input.query, &index);
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score, "ranking out of order");
    }
    assert!(ranked.iter().all(|m| m.score >= 0), "negative score survived");

    let shown = results(&input.query, &index);
    if input.query.is_empty() {
        assert!(shown.is_empty(), "empty query rendered results");
    }
    for m in &shown {
        assert!(m.text.contains(&input.query), "shown label lacks query");
    }
});
