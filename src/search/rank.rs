// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stage one: score every record and order the survivors.

use crate::fuzzy::fuzzy_cmp;
use crate::types::{Match, Record};

/// Rank `records` against `query`, best score first.
///
/// Records that don't contain the query as a subsequence are dropped, and so
/// are matches whose total came out negative: a negative score is the no-match
/// sentinel in the index format this reads, even when it was earned honestly
/// by a hit far into a long label.
///
/// The sort is stable, so equal scores keep index order.
pub fn rank(query: &str, records: &[Record]) -> Vec<Match> {
    let mut matches: Vec<Match> = records
        .iter()
        .filter_map(|record| {
            fuzzy_cmp(&record.text, query)
                .filter(|score| *score >= 0)
                .map(|score| Match::from_record(record, score))
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    tracing::debug!(
        query,
        candidates = records.len(),
        matched = matches.len(),
        "ranked query"
    );

    matches
}
