// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the docs search box.
//!
//! The page still owns the DOM, `fetch()` and `sessionStorage`. It hands the
//! fetched JSON to `loadIndex`, forwards input and focus events, and renders the
//! `{text, url}` pairs it gets back.
//!
//! ```js
//! const search = new DocSift();
//! search.onReady(sessionStorage.getItem("searchInput"));
//! fetch("./search.json").then(r => r.text()).then(json => {
//!     search.loadIndex(json);
//!     render(search.render());
//! });
//! input.addEventListener("input", e => {
//!     sessionStorage.setItem("searchInput", e.target.value);
//!     render(search.onQueryChanged(e.target.value));
//! });
//! ```

use std::sync::Arc;

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::index::{parse_records, IndexStore};
use crate::session::{MemoryStore, SearchSession};
use crate::types::Match;

/// Result shape handed to JavaScript.
#[derive(Serialize)]
struct JsMatch<'a> {
    text: &'a str,
    url: &'a str,
}

/// Selection range handed to JavaScript for `onFocus`.
#[derive(Serialize)]
struct JsSelection {
    start: usize,
    end: usize,
}

fn to_js(matches: &[Match]) -> Result<JsValue, JsValue> {
    let out: Vec<JsMatch<'_>> = matches
        .iter()
        .map(|m| JsMatch {
            text: &m.text,
            url: &m.url,
        })
        .collect();
    to_value(&out).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// WASM-accessible search box state.
#[wasm_bindgen]
pub struct DocSift {
    session: SearchSession<MemoryStore>,
}

impl Default for DocSift {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DocSift {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DocSift {
        DocSift {
            session: SearchSession::new(Arc::new(IndexStore::new()), MemoryStore::new()),
        }
    }

    /// Install the index from a `search.json` string. Returns the record count.
    ///
    /// Throws on a malformed payload or a second load.
    #[wasm_bindgen(js_name = "loadIndex")]
    pub fn load_index(&self, json: &str) -> Result<usize, JsValue> {
        let records = parse_records(json.as_bytes())
            .map_err(|e| js_sys::Error::new(&e.to_string()))?;
        self.session
            .index()
            .install(records)
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    /// Restore a saved query (pass `sessionStorage.getItem(...)` straight in).
    #[wasm_bindgen(js_name = "onReady")]
    pub fn on_ready(&mut self, saved_query: Option<String>) -> bool {
        self.session.on_ready(saved_query.as_deref())
    }

    /// Render results for a new query.
    #[wasm_bindgen(js_name = "onQueryChanged")]
    pub fn on_query_changed(&mut self, query: &str) -> Result<JsValue, JsValue> {
        to_js(&self.session.on_query_changed(query))
    }

    /// Selection range covering the current query.
    #[wasm_bindgen(js_name = "onFocus")]
    pub fn on_focus(&self) -> Result<JsValue, JsValue> {
        let range = self.session.on_focus();
        to_value(&JsSelection {
            start: range.start,
            end: range.end,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Results for the current query, without changing it.
    #[wasm_bindgen]
    pub fn render(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.render())
    }

    /// Current query.
    #[wasm_bindgen(getter)]
    pub fn query(&self) -> String {
        self.session.query().to_string()
    }

    /// Number of loaded records.
    #[wasm_bindgen(getter, js_name = "recordCount")]
    pub fn record_count(&self) -> usize {
        self.session.index().len()
    }

    #[wasm_bindgen(js_name = "isLoaded")]
    pub fn is_loaded(&self) -> bool {
        self.session.index().is_loaded()
    }
}
