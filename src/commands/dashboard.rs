//! Interactive dashboard loop.
//!
//! Renders the report once, then waits for commands on the input:
//! `r` (or an empty line) reruns, `reload` drops the cached dataset
//! before rerunning, `q` quits. Reruns reuse the cached dataset unless
//! the file changed on disk.

use super::models::{ReportArgs, ReportOutcome};
use super::report::render_report;
use crate::dataset::DatasetCache;
use anyhow::{Context, Result};
use log::{error, info};
use std::io::BufRead;

/// A line of dashboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardCommand {
    Rerun,
    Reload,
    Quit,
    Unknown,
}

impl DashboardCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim().to_ascii_lowercase().as_str() {
            "" | "r" | "rerun" => DashboardCommand::Rerun,
            "reload" => DashboardCommand::Reload,
            "q" | "quit" | "exit" => DashboardCommand::Quit,
            _ => DashboardCommand::Unknown,
        }
    }
}

/// Run one render pass through the cache
///
/// **Public** - a single dashboard pass
pub fn render_pass(cache: &mut DatasetCache, args: &ReportArgs) -> Result<ReportOutcome> {
    let dataset = cache
        .get_or_load(&args.data_path)
        .with_context(|| format!("Failed to load dataset {}", args.data_path.display()))?;

    render_report(&dataset, args)
}

/// Run the dashboard until `q` or end of input
///
/// **Public** - main entry point called from main.rs
///
/// The first pass must succeed; failures on later passes are logged
/// and the loop keeps waiting so the file can be fixed and reloaded.
///
/// # Returns
/// Number of successful render passes
pub fn run_dashboard<R: BufRead>(args: &ReportArgs, input: R) -> Result<usize> {
    let mut cache = DatasetCache::new();

    render_pass(&mut cache, args)?;
    let mut passes = 1;

    println!("Dashboard ready. [r]erun, reload, [q]uit");

    for line in input.lines() {
        let line = line.context("Failed to read dashboard input")?;

        match DashboardCommand::parse(&line) {
            DashboardCommand::Quit => break,
            DashboardCommand::Unknown => {
                println!("Unknown command: {:?}. Use r, reload or q.", line.trim());
                continue;
            }
            DashboardCommand::Reload => {
                cache.invalidate(&args.data_path);
                info!("Cache invalidated, reloading {}", args.data_path.display());
            }
            DashboardCommand::Rerun => {}
        }

        match render_pass(&mut cache, args) {
            Ok(outcome) => {
                passes += 1;
                println!(
                    "Rendered {} records ({} fraudulent) -> {}",
                    outcome.record_count,
                    outcome.fraud_count,
                    outcome.json_path.display()
                );
            }
            Err(e) => error!("Render failed: {:#}", e),
        }
    }

    let (hits, misses) = cache.stats();
    info!("Dashboard closed after {} passes (cache: {} hits, {} misses)", passes, hits, misses);

    Ok(passes)
}
