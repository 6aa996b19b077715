// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a documentation search.
//!
//! A `Record` is one entry of `search.json` as emitted by the docs generator:
//! a label to match against and the page/anchor it points at. A `Match` is
//! what a query produces from a record, scored and with its link assembled.
//!
//! # Invariants
//!
//! - **Record**: immutable once loaded. Missing or `null` fields are empty
//!   strings, never errors. A half-broken index still searches.
//!
//! - **Match**: `url == record.file + "#" + record.id`. Matches are ephemeral;
//!   nothing holds on to them between queries.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score of a subsequence match. Higher is better.
pub type Score = i64;

/// One searchable entry of the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Label shown to the user and matched against the query.
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
    /// Target document path, relative to the docs root.
    #[serde(default, deserialize_with = "lenient_string")]
    pub file: String,
    /// Anchor inside the target document.
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
}

impl Record {
    pub fn new(text: impl Into<String>, file: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            file: file.into(),
            id: id.into(),
        }
    }

    /// Link to the record's target: `file#id`.
    pub fn url(&self) -> String {
        format!("{}#{}", self.file, self.id)
    }

    /// True when any field came in missing or empty.
    pub fn is_degraded(&self) -> bool {
        self.text.is_empty() || self.file.is_empty() || self.id.is_empty()
    }
}

/// A record that survived a query, with its score and assembled link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub score: Score,
    pub text: String,
    pub url: String,
}

impl Match {
    pub fn from_record(record: &Record, score: Score) -> Self {
        Self {
            score,
            text: record.text.clone(),
            url: record.url(),
        }
    }
}

/// Accept strings, numbers, booleans and `null` for a text field.
///
/// Generators are not always careful about quoting anchors (`"id": 42`), and a
/// missing label should cost one useless entry, not the whole index.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientString;

    impl<'de> Visitor<'de> for LenientString {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string, number, boolean or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientString)
}
