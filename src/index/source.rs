// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where index payloads come from.
//!
//! The store doesn't care whether bytes arrive from disk, a `fetch()` in the
//! browser, or a test fixture. It awaits an `IndexSource` once and parses
//! whatever comes back.

use std::future::Future;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::error::LoadError;
use crate::types::Record;

/// One-shot provider of a raw `search.json` payload.
pub trait IndexSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>>;
}

/// Payload already in memory.
#[derive(Debug, Clone, Default)]
pub struct BytesSource(pub Vec<u8>);

impl BytesSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

impl IndexSource for BytesSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        Ok(self.0.clone())
    }
}

/// Payload read from a file on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl IndexSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Parse a `search.json` payload: a JSON array of record objects.
///
/// Individual records are parsed leniently (see [`Record`]); the overall shape
/// is not. Anything but an array of objects is rejected whole.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}
