//! JetHeroes command line.
//!
//! Loads a hero table, applies queries, and prints the grouped result after
//! each one.
//!
//! Usage:
//!   jetheroes --query ga --query gat
//!   jetheroes --data heroes.json --interactive

use std::{path::PathBuf, sync::Arc};
use anyhow::{Context, Result};
use clap::Parser;
use jetheroes_cli::{bundled_store, render_json, render_text};
use jetheroes_search::{SearchActor, SearchConfig, SearchEngine, SearchHandle, SearchSnapshot};
use jetheroes_store::HeroStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "jetheroes")]
#[command(about = "Filter heroes by name and list them under alphabetical headers")]
struct Args {
    /// JSON hero table to load (defaults to the bundled table)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Query to apply; repeat to apply several in order
    #[arg(short, long = "query")]
    queries: Vec<String>,

    /// Read queries line by line from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Print snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Maximum queued queries
    #[arg(long, default_value = "64")]
    queue_capacity: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let store = match &args.data {
        Some(path) => HeroStore::load(path)
            .with_context(|| format!("Failed to load hero table from {}", path.display()))?,
        None => bundled_store().context("Failed to parse bundled hero table")?,
    };
    info!("Serving {} heroes", store.len());

    let engine = SearchEngine::new(Arc::new(store));
    let handle = SearchActor::spawn(
        engine,
        SearchConfig {
            queue_capacity: args.queue_capacity,
        },
    );

    if args.queries.is_empty() && !args.interactive {
        print_snapshot(&handle.snapshot(), args.json)?;
        return Ok(());
    }

    let mut revision = 0;
    for query in &args.queries {
        revision += 1;
        apply(&handle, query, revision, args.json).await?;
    }

    if args.interactive {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            revision += 1;
            apply(&handle, &line, revision, args.json).await?;
        }
        debug!("stdin closed after {} queries", revision);
    }

    Ok(())
}

async fn apply(handle: &SearchHandle, query: &str, revision: u64, json: bool) -> Result<()> {
    handle.set_query(query).await?;
    let snapshot = handle.wait_for_revision(revision).await?;
    print_snapshot(&snapshot, json)
}

fn print_snapshot(snapshot: &SearchSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", render_json(snapshot).context("Failed to encode snapshot")?);
    } else {
        print!("{}", render_text(snapshot));
    }
    Ok(())
}
