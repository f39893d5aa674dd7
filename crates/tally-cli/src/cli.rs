//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Track spending against monthly budgets
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Personal finance tracker with budgets and reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot file (JSON with transactions and budgets)
    #[arg(long, default_value = "tally.json", global = true)]
    pub data: PathBuf,

    /// Config file (defaults to the data-dir override, then built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (defaults to config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to config)
        #[arg(long)]
        host: Option<String>,

        /// Start with the demo data set when no snapshot file exists
        #[arg(long)]
        seed: bool,
    },

    /// Generate reports from the snapshot file
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// List transactions, newest first
    Transactions {
        /// Search description or category (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category name
        #[arg(short, long)]
        category: Option<String>,

        /// Transaction type: income or expense
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Maximum rows to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Write the demo data set to the snapshot file
    Sample {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Income, expenses and spending by category
    Summary {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Budget vs actual spending
    Budgets {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Expenses per month
    Monthly {
        /// Number of months to show (defaults to config)
        #[arg(short = 'n', long)]
        months: Option<usize>,
    },

    /// Health score, trend and spending pace
    Insights {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}
