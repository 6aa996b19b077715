// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading an index.
//!
//! Searching can't fail. Loading can, in a handful of ways, and all of them
//! leave the store exactly as it was.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why an index load did not take.
#[derive(Debug)]
pub enum LoadError {
    /// The index file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The payload is not a JSON array of record objects.
    Parse(serde_json::Error),
    /// The store already holds an index; it is populated once.
    AlreadyLoaded,
    /// A custom source failed for its own reasons.
    Source(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "failed to read index {}: {}", path.display(), source)
            }
            LoadError::Parse(e) => write!(f, "invalid index payload: {}", e),
            LoadError::AlreadyLoaded => write!(f, "index already loaded"),
            LoadError::Source(msg) => write!(f, "index source failed: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse(e) => Some(e),
            LoadError::AlreadyLoaded | LoadError::Source(_) => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}
