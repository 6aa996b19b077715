// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search pipeline: rank, then filter.
//!
//! Two stages, kept separate so each can be tested on its own:
//!
//! ```text
//! query ──▶ rank(query, records) ──▶ filter(_, contains_query(query)) ──▶ visible
//!           fuzzy subsequence score    literal, case-sensitive substring
//!           decides ORDER              decides MEMBERSHIP
//! ```
//!
//! The second stage discards most of what makes the first one fuzzy. That is
//! how the docs site has always behaved and it stays that way until someone
//! decides otherwise; see DESIGN.md.

mod filter;
mod rank;

pub use filter::*;
pub use rank::*;

use crate::types::{Match, Record};

/// Matches the user actually sees for `query`.
///
/// An empty query shows nothing, even though it fuzzy-matches every record.
pub fn results(query: &str, records: &[Record]) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }
    filter(rank(query, records), contains_query(query))
}
