// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy case-insensitive subsequence matching.
//!
//! Each query character is looked up left to right, starting just after the
//! previous hit, and scores `MAX_SCORE - position`. Early hits score high, so
//! prefix-like matches float to the top without any extra ranking rules.
//!
//! ```text
//! text:   H e l l o   W o r l d
//!         0 1 2 3 4 5 6 7 8 9 10
//! query:  h           w
//! score:  (256 - 0) + (256 - 6) = 506
//! ```

use crate::types::Score;

/// Per-character score ceiling. A hit at position `p` earns `MAX_SCORE - p`.
///
/// Positions past `MAX_SCORE` earn negative amounts. They are summed as-is,
/// not clamped.
pub const MAX_SCORE: Score = 256;

/// Score `text` against `query` as a case-insensitive subsequence.
///
/// Returns `None` when some query character can't be found in order. An empty
/// query matches everything with score `0`. Positions count `char`s, not bytes.
///
/// Total over any pair of strings: never panics, never overflows.
///
/// # Example
///
/// ```
/// use docsift::fuzzy_cmp;
///
/// assert_eq!(fuzzy_cmp("Hello World", "hw"), Some(506));
/// assert_eq!(fuzzy_cmp("bar foo", "foobar"), None);
/// ```
pub fn fuzzy_cmp(text: &str, query: &str) -> Option<Score> {
    // The cursor only ever moves forward, so one iterator serves every lookup.
    let mut cursor = text.chars().enumerate();
    let mut score: Score = 0;

    for needle in query.chars() {
        let (position, _) = cursor.by_ref().find(|&(_, c)| chars_eq_ignore_case(c, needle))?;
        score = score.saturating_add(MAX_SCORE.saturating_sub(position as Score));
    }

    Some(score)
}

/// Case-insensitive `char` equality via full uppercase mappings.
///
/// `'ß'` uppercases to `"SS"`, so it equals neither `'s'` nor `'S'`.
#[inline]
pub fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}
