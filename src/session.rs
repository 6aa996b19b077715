// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box, minus the browser.
//!
//! A docs page has one input, one result list and three events: the page
//! becomes ready, the user types, the user focuses the box. `SearchSession`
//! turns each of those into a method so the whole interaction can be driven
//! from a test, a terminal, or the WASM bindings.
//!
//! ```text
//! on_ready(saved) ─────▶ query restored (nothing rendered yet)
//! load_index(src) ─────▶ index installed ─▶ render(query)
//! on_query_changed(q) ─▶ persist q ─▶ render(q)
//! on_focus() ──────────▶ select the whole query
//! ```
//!
//! Every render recomputes from scratch. Nothing is queued: typing before the
//! index arrives renders nothing, and the load re-renders whatever the box
//! holds when it lands.

use std::collections::HashMap;
use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::index::{IndexSource, IndexStore};
use crate::types::Match;

/// Key the last query is persisted under.
pub const SESSION_KEY: &str = "searchInput";

/// Session-scoped key/value storage for the last query.
///
/// Persistence is a convenience. Implementations swallow their own failures;
/// the search works the same with a store that forgets everything.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-process storage. Forgotten when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Storage backed by a JSON object in a file, written through on every `set`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open `path`. A missing or unreadable file starts an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt session file");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        let written = serde_json::to_vec(&self.values)
            .map_err(std::io::Error::from)
            .and_then(|bytes| fs::write(&self.path, bytes));
        if let Err(e) = written {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist session");
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

/// One search box bound to an index.
#[derive(Debug)]
pub struct SearchSession<S> {
    index: Arc<IndexStore>,
    store: S,
    query: String,
}

impl<S: SessionStore> SearchSession<S> {
    pub fn new(index: Arc<IndexStore>, store: S) -> Self {
        Self {
            index,
            store,
            query: String::new(),
        }
    }

    /// Current contents of the search box.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn index(&self) -> &Arc<IndexStore> {
        &self.index
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Page is ready: put a saved query back in the box.
    ///
    /// An absent or empty saved query leaves the box alone. Nothing is rendered;
    /// results appear once the index loads or the user types.
    pub fn on_ready(&mut self, saved_query: Option<&str>) -> bool {
        match saved_query {
            Some(saved) if !saved.is_empty() => {
                self.query = saved.to_string();
                true
            }
            _ => false,
        }
    }

    /// `on_ready` with whatever the session store remembers.
    pub fn restore(&mut self) -> bool {
        let saved = self.store.get(SESSION_KEY);
        self.on_ready(saved.as_deref())
    }

    /// The user typed: remember the query and render it.
    pub fn on_query_changed(&mut self, query: &str) -> Vec<Match> {
        self.store.set(SESSION_KEY, query);
        self.query = query.to_string();
        self.render()
    }

    /// The box gained focus: select everything in it.
    pub fn on_focus(&self) -> Range<usize> {
        0..self.query.chars().count()
    }

    /// The index arrived: render whatever the box currently holds.
    pub fn on_index_loaded(&self) -> Vec<Match> {
        self.render()
    }

    /// Load the index from `source`, then render.
    ///
    /// A failed load is logged and otherwise ignored; the session keeps running
    /// against an empty index and renders nothing.
    pub async fn load_index<I: IndexSource>(&self, source: &I) -> Vec<Match> {
        if let Err(e) = self.index.load(source).await {
            tracing::warn!(error = %e, "search index unavailable");
        }
        self.on_index_loaded()
    }

    /// Visible results for the current query.
    pub fn render(&self) -> Vec<Match> {
        self.index.results(&self.query)
    }
}
