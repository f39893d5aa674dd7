//! Tally CLI - Personal finance tracker
//!
//! Usage:
//!   tally sample                    Write demo data to tally.json
//!   tally report summary -m 2024-01 Print a month's totals
//!   tally transactions --search gas List matching transactions
//!   tally serve --port 3000         Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port, host, seed } => {
            commands::cmd_serve(&cli.data, &config, host.as_deref(), port, seed).await
        }
        Commands::Sample { force } => commands::cmd_sample(&cli.data, force),
        Commands::Transactions {
            search,
            category,
            kind,
            limit,
        } => {
            let snapshot = commands::load_snapshot(&cli.data)?;
            let filter = commands::build_filter(search, category, kind.as_deref())?;
            commands::cmd_transactions_list(&snapshot, &filter, limit)
        }
        Commands::Report { report_type } => {
            let snapshot = commands::load_snapshot(&cli.data)?;
            match report_type {
                ReportType::Summary { month } => {
                    let month = commands::resolve_month(month.as_deref())?;
                    commands::cmd_report_summary(&snapshot, month, &config.reports)
                }
                ReportType::Budgets { month } => {
                    let month = commands::resolve_month(month.as_deref())?;
                    commands::cmd_report_budgets(&snapshot, month)
                }
                ReportType::Monthly { months } => {
                    let months = months.unwrap_or(config.reports.chart_months);
                    commands::cmd_report_monthly(&snapshot, months)
                }
                ReportType::Insights { month } => {
                    let month = commands::resolve_month(month.as_deref())?;
                    let today = chrono::Local::now().date_naive();
                    commands::cmd_report_insights(&snapshot, month, today, &config.reports)
                }
            }
        }
    }
}
