// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: ordered subsequences, scored by how early they land.
//!
//! No edit distance, no tokenization. A query matches when its characters show
//! up in the label in the same order, ignoring case.

mod subsequence;

pub use subsequence::*;
