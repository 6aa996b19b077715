// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index payload parsing under adversarial input.
//!
//! A broken `search.json` should be rejected whole or loaded leniently, never
//! crash the page.

#![no_main]

use docsift::{parse_records, IndexStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(records) = parse_records(data) {
        let count = records.len();
        let store = IndexStore::new();
        assert_eq!(store.install(records).ok(), Some(count));
        assert_eq!(store.len(), count);
        let _ = store.results("a");
    }
});
