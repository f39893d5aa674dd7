//! Shared command utilities
//!
//! This module contains:
//! - `load_config` - Resolve configuration (explicit path, override, defaults)
//! - `load_snapshot` - Read a snapshot file
//! - `resolve_month` - Parse a `--month` argument
//! - `build_filter` - Turn list flags into a transaction filter
//! - `cmd_sample` - Write the demo data set

use std::path::Path;

use anyhow::{Context, Result};
use tally_core::models::{Snapshot, TransactionType};
use tally_core::month::Month;
use tally_core::store::{sample_snapshot, TransactionFilter};
use tally_core::Config;

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    Config::load(path).context("Failed to load configuration")
}

/// Read a snapshot file
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let bytes = std::fs::read(path).with_context(|| {
        format!(
            "Failed to read {} (create one with 'tally sample')",
            path.display()
        )
    })?;
    let snapshot = Snapshot::from_json(&bytes)
        .with_context(|| format!("Invalid snapshot file {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        transactions = snapshot.transactions.len(),
        budgets = snapshot.budgets.len(),
        "Snapshot loaded"
    );

    Ok(snapshot)
}

/// Parse `--month`, defaulting to the current month
pub fn resolve_month(month: Option<&str>) -> Result<Month> {
    match month {
        Some(m) => m.parse().map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(Month::current()),
    }
}

pub fn build_filter(
    search: Option<String>,
    category: Option<String>,
    kind: Option<&str>,
) -> Result<TransactionFilter> {
    let kind = kind
        .map(|k| k.parse::<TransactionType>())
        .transpose()
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(TransactionFilter {
        search,
        category,
        kind,
    })
}

pub fn cmd_sample(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    let snapshot = sample_snapshot();
    let json = snapshot.to_json_pretty()?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✅ Wrote demo data to {}", path.display());
    println!(
        "   {} transactions, {} budgets",
        snapshot.transactions.len(),
        snapshot.budgets.len()
    );
    println!();
    println!("Next steps:");
    println!("  1. Print a report: tally report summary --month 2024-01");
    println!("  2. Start the API: tally serve");

    Ok(())
}
