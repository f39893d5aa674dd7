//! Transaction command implementations

use anyhow::Result;
use tally_core::models::Snapshot;
use tally_core::store::{net_total, TransactionFilter};

use super::truncate;

pub fn cmd_transactions_list(
    snapshot: &Snapshot,
    filter: &TransactionFilter,
    limit: usize,
) -> Result<()> {
    let matched = filter.apply(&snapshot.transactions);

    if matched.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    println!();
    println!("📝 Transactions ({} matching)", matched.len());
    println!("   ─────────────────────────────────────────────────────────────");

    for tx in matched.iter().take(limit) {
        let amount_str = if tx.is_expense() {
            format!("\x1b[31m-${:.2}\x1b[0m", tx.amount) // Red for expenses
        } else {
            format!("\x1b[32m+${:.2}\x1b[0m", tx.amount) // Green for income
        };

        println!(
            "   {} │ {:>20} │ {:18} │ {}",
            tx.date,
            amount_str,
            truncate(&tx.category, 18),
            truncate(&tx.description, 30)
        );
    }

    if matched.len() > limit {
        println!("   ... {} more", matched.len() - limit);
    }

    println!();
    println!("   Net: ${:.2}", net_total(matched.iter().copied()));

    Ok(())
}
