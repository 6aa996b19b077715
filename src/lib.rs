// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search for static documentation sites.
//!
//! The docs generator writes a `search.json`: a flat list of labels, each
//! pointing at a page and an anchor. This crate loads that list once and
//! answers queries against it with a subsequence heuristic: the query's
//! characters must appear in the label in order, ignoring case, and hits
//! closer to the start of the label score higher.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   index/     │────▶│   search/    │
//! │  (Record,   │     │ (IndexStore, │     │ (rank,       │
//! │   Match)    │     │  IndexSource)│     │  filter)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    ▲
//!                            ▼                    │
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  session.rs  │     │   fuzzy/     │
//!                     │ (search box  │     │ (fuzzy_cmp,  │
//!                     │  events)     │     │  MAX_SCORE)  │
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::{IndexStore, Record};
//!
//! let store = IndexStore::with_records(vec![
//!     Record::new("apple", "fruit.html", "apple"),
//!     Record::new("grape", "fruit.html", "grape"),
//! ]);
//!
//! let ranked = store.search("a");
//! assert_eq!(ranked[0].text, "apple");
//! assert_eq!(ranked[0].url, "fruit.html#apple");
//! ```

// Module declarations
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod search;
pub mod session;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use error::LoadError;
pub use fuzzy::{chars_eq_ignore_case, fuzzy_cmp, MAX_SCORE};
#[cfg(not(target_arch = "wasm32"))]
pub use index::FileSource;
pub use index::{parse_records, BytesSource, IndexSource, IndexStore};
pub use search::{contains_query, filter, rank, results};
pub use session::{FileStore, MemoryStore, SearchSession, SessionStore, SESSION_KEY};
pub use types::{Match, Record, Score};

#[cfg(feature = "wasm")]
pub use wasm::DocSift;
