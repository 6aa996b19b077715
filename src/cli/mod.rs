// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `search` for one-shot queries, `inspect` to look over a
//! `search.json`, and `interactive` to drive the search box from stdin, one
//! line per keystroke-worth of input.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Fuzzy search over a static documentation index",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index and print the visible results
    Search {
        /// Path to search.json
        index: PathBuf,

        /// Search query (case-sensitive for display, case-insensitive for ranking)
        query: String,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        /// Show the full fuzzy ranking with scores, before the display filter
        #[arg(long)]
        ranked: bool,
    },

    /// Summarize the records in an index
    Inspect {
        /// Path to search.json
        index: PathBuf,
    },

    /// Read queries from stdin, one per line, and print results for each
    Interactive {
        /// Path to search.json
        index: PathBuf,

        /// File that remembers the last query between runs
        #[arg(long, env = "DOCSIFT_SESSION")]
        session: Option<PathBuf>,
    },
}
