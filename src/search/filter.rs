// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stage two: decide which ranked matches are shown.

use crate::types::Match;

/// Keep the matches accepted by `predicate`, preserving rank order.
pub fn filter<P>(matches: Vec<Match>, predicate: P) -> Vec<Match>
where
    P: Fn(&Match) -> bool,
{
    matches.into_iter().filter(|m| predicate(m)).collect()
}

/// Predicate: the label contains `query` literally, case included.
///
/// This is stricter than the fuzzy pass. `"Alphabet"` ranks for `"Ab"` but is
/// not shown, because `"Ab"` does not occur in it verbatim.
pub fn contains_query(query: &str) -> impl Fn(&Match) -> bool + '_ {
    move |m: &Match| m.text.contains(query)
}
