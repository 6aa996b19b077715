// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::io::{self, BufRead};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsift::{
    FileSource, FileStore, IndexStore, MemoryStore, SearchSession, SessionStore, SESSION_KEY,
};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, GRAY};
use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so stdout stays clean for results and --json
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            index,
            query,
            json,
            ranked,
        } => run_search(&index, &query, json, ranked).await,
        Commands::Inspect { index } => run_inspect(&index).await,
        Commands::Interactive { index, session } => match session {
            Some(path) => run_interactive(&index, FileStore::open(path)).await,
            None => run_interactive(&index, MemoryStore::new()).await,
        },
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Load an index the user named explicitly. Failing here is an error, unlike
/// inside a session where a missing index just means no results.
async fn load_store(path: &Path) -> Result<IndexStore> {
    let store = IndexStore::new();
    store
        .load(&FileSource::new(path))
        .await
        .with_context(|| format!("could not load {}", path.display()))?;
    Ok(store)
}

async fn run_search(path: &Path, query: &str, json: bool, ranked: bool) -> Result<()> {
    let store = load_store(path).await?;
    let matches = if ranked {
        store.search(query)
    } else {
        store.results(query)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        display::print_matches(&matches, ranked);
    }
    Ok(())
}

async fn run_inspect(path: &Path) -> Result<()> {
    let store = load_store(path).await?;
    let records = store.records();

    let files: BTreeSet<&str> = records.iter().map(|r| r.file.as_str()).collect();
    let degraded: Vec<_> = records.iter().filter(|r| r.is_degraded()).collect();

    display::section_top(&path.display().to_string());
    display::row(&format!(" records       {}", records.len()));
    display::row(&format!(" target files  {}", files.len()));
    display::row(&format!(" degraded      {}", degraded.len()));
    display::section_bot();

    if !degraded.is_empty() {
        display::section_top("DEGRADED RECORDS");
        for record in &degraded {
            display::row(&format!(
                " {} {}",
                themed(GRAY, &[], &format!("{:?}", record.text)),
                record.url()
            ));
        }
        display::section_bot();
    }
    Ok(())
}

/// Drive a search session from stdin: each line replaces the query.
async fn run_interactive<S: SessionStore>(path: &Path, store: S) -> Result<()> {
    let mut session = SearchSession::new(Arc::new(IndexStore::new()), store);

    if session.restore() {
        println!(
            "{} {}",
            themed(GRAY, &[], "restored"),
            themed(CYAN, &[BOLD], session.query())
        );
    }

    let shown = session.load_index(&FileSource::new(path)).await;
    if !session.query().is_empty() {
        display::print_matches(&shown, false);
    }
    tracing::debug!(
        key = SESSION_KEY,
        records = session.index().len(),
        "interactive session ready"
    );

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let shown = session.on_query_changed(&line);
        if !line.is_empty() {
            display::print_matches(&shown, false);
        }
    }
    Ok(())
}
