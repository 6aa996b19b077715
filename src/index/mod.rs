// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index store: empty until loaded, then frozen.
//!
//! Lifecycle:
//!
//! ```text
//! IndexStore::new()  ──▶  [empty]  ──load(source)──▶  [loaded]  ──▶ read-only forever
//!                            │                            │
//!                         queries see                 queries see
//!                         no records                  every record
//! ```
//!
//! One writer (the load, once), many readers. The payload is fetched and
//! parsed completely before it is swapped in under the write lock, so a reader
//! sees either nothing or everything. Readers take an `Arc` snapshot and drop
//! the lock immediately; a slow query never holds up the load.

mod source;

pub use source::*;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::LoadError;
use crate::search::{rank, results};
use crate::types::{Match, Record};

/// Owner of the loaded records.
#[derive(Debug, Default)]
pub struct IndexStore {
    records: RwLock<Option<Arc<[Record]>>>,
}

impl IndexStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that is already loaded with `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(Some(records.into())),
        }
    }

    /// Fetch, parse and install an index from `source`.
    ///
    /// Returns the number of records loaded. On any error the store is left
    /// untouched: still empty if it was empty, still holding the first index if
    /// one was already installed.
    pub async fn load<S: IndexSource>(&self, source: &S) -> Result<usize, LoadError> {
        if self.is_loaded() {
            return Err(LoadError::AlreadyLoaded);
        }

        let bytes = source.fetch().await?;
        let records = parse_records(&bytes)?;
        let count = self.install(records)?;

        tracing::info!(records = count, "search index loaded");
        Ok(count)
    }

    /// Swap `records` in as the index. Fails if an index is already present.
    pub fn install(&self, records: Vec<Record>) -> Result<usize, LoadError> {
        let mut slot = self.records.write();
        if slot.is_some() {
            return Err(LoadError::AlreadyLoaded);
        }
        let count = records.len();
        *slot = Some(records.into());
        Ok(count)
    }

    /// Snapshot of the current records. Empty before load.
    pub fn records(&self) -> Arc<[Record]> {
        self.records
            .read()
            .clone()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    /// Has a load completed?
    pub fn is_loaded(&self) -> bool {
        self.records.read().is_some()
    }

    /// Number of records. Zero before load.
    pub fn len(&self) -> usize {
        self.records.read().as_ref().map_or(0, |r| r.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fuzzy ranking of every record against `query`, best first.
    pub fn search(&self, query: &str) -> Vec<Match> {
        rank(query, &self.records())
    }

    /// What the user sees for `query`: the ranking, narrowed to labels that
    /// contain the query verbatim. Empty for an empty query.
    pub fn results(&self, query: &str) -> Vec<Match> {
        results(query, &self.records())
    }
}
