//! Report command implementations

use anyhow::Result;
use chrono::NaiveDate;
use tally_core::analytics::{
    budget_alerts, category_breakdown, compare_budgets, monthly_expenses, monthly_totals,
    AnalysisContext, BudgetStatus,
};
use tally_core::config::ReportSettings;
use tally_core::models::Snapshot;
use tally_core::month::Month;

use super::truncate;

fn status_marker(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Good => "✅",
        BudgetStatus::Warning => "⚠️ ",
        BudgetStatus::Over => "🔴",
    }
}

pub fn cmd_report_summary(
    snapshot: &Snapshot,
    month: Month,
    settings: &ReportSettings,
) -> Result<()> {
    let totals = monthly_totals(&snapshot.transactions, month);
    let breakdown = category_breakdown(&snapshot.transactions, month);

    println!();
    println!("📊 Monthly Summary - {}", month.label());
    println!("   ─────────────────────────────────────────────────────────────");

    if totals.transaction_count == 0 {
        println!("   No transactions found in {}.", month);
        return Ok(());
    }

    println!("   Income:   ${:>10.2}", totals.total_income);
    println!("   Expenses: ${:>10.2}", totals.total_expenses);
    println!("   Net:      ${:>10.2}", totals.net_income);

    if breakdown.is_empty() {
        return Ok(());
    }

    println!();
    println!("   {:25} │ {:>10} │ {:>6}", "Category", "Amount", "%");
    println!("   ──────────────────────────┼────────────┼────────");
    for cat in breakdown.top(settings.top_categories) {
        println!(
            "   {:25} │ {:>10.2} │ {:>5.1}%",
            truncate(&cat.category, 25),
            cat.amount,
            cat.percentage
        );
    }

    let hidden = breakdown.len().saturating_sub(settings.top_categories);
    if hidden > 0 {
        println!("   ... and {} more", hidden);
    }

    Ok(())
}

pub fn cmd_report_budgets(snapshot: &Snapshot, month: Month) -> Result<()> {
    let breakdown = category_breakdown(&snapshot.transactions, month);
    let comparisons = compare_budgets(&snapshot.budgets, &breakdown, month);

    println!();
    println!("💰 Budgets - {}", month.label());
    println!("   ─────────────────────────────────────────────────────────────");

    if comparisons.is_empty() {
        println!("   No budgets set for {}.", month);
        return Ok(());
    }

    println!(
        "      {:22} │ {:>9} │ {:>9} │ {:>9} │ {:>6}",
        "Category", "Budget", "Spent", "Left", "Used"
    );
    println!("   ─────────────────────────┼───────────┼───────────┼───────────┼───────");

    for c in &comparisons {
        println!(
            "   {} {:22} │ {:>9.2} │ {:>9.2} │ {:>9.2} │ {:>5.1}%",
            status_marker(c.status),
            truncate(&c.category, 22),
            c.budget,
            c.actual,
            c.remaining,
            c.percentage
        );
    }

    let alerts = budget_alerts(&comparisons);
    if !alerts.is_empty() {
        println!();
        for c in &alerts.over {
            println!(
                "   🔴 {} is over budget by ${:.2}",
                c.category,
                c.remaining.abs()
            );
        }
        for c in &alerts.warning {
            println!("   ⚠️  {} has used {:.0}% of its budget", c.category, c.percentage);
        }
    }

    Ok(())
}

pub fn cmd_report_monthly(snapshot: &Snapshot, months: usize) -> Result<()> {
    let series = monthly_expenses(&snapshot.transactions, months);

    println!();
    println!("📈 Monthly Expenses");
    println!("   ─────────────────────────────────────────────────────────────");

    if series.is_empty() {
        println!("   No expenses recorded.");
        return Ok(());
    }

    let max = series.iter().map(|m| m.expenses).fold(0.0_f64, f64::max);
    for m in &series {
        let width = if max > 0.0 {
            (m.expenses / max * 30.0).round() as usize
        } else {
            0
        };
        println!(
            "   {:8} │ {:>10.2} │ {}",
            m.label,
            m.expenses,
            "█".repeat(width)
        );
    }

    Ok(())
}

pub fn cmd_report_insights(
    snapshot: &Snapshot,
    month: Month,
    today: NaiveDate,
    settings: &ReportSettings,
) -> Result<()> {
    let report = AnalysisContext::from_snapshot(snapshot, month)
        .with_today(today)
        .with_top_categories(settings.top_categories)
        .analyze();

    println!();
    println!("🩺 Financial Health - {}", month.label());
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Score: {}/100 ({})",
        report.health.score,
        report.health.rating.label()
    );
    println!("   {}", report.health.rating.advice());

    if !report.health.factors.is_empty() {
        println!();
        println!("   Factors:");
        for factor in &report.health.factors {
            println!("   • {}", factor);
        }
    }

    println!();
    println!("   Savings rate:      {:>7.1}%", report.savings_rate);
    println!(
        "   vs {}:   {:>+7.1}%",
        report.trend.previous_month, report.trend.change_percent
    );
    println!("   Daily average:    ${:>8.2}", report.pace.daily_average);
    println!("   Projected month:  ${:>8.2}", report.pace.projected_monthly);

    if let Some(top) = report.top_categories.first() {
        println!(
            "   Top category:      {} (${:.2})",
            top.category, top.amount
        );
    }

    Ok(())
}
