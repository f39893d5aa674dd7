//! Budget operations for the in-memory store

use tracing::debug;

use super::MemoryStore;
use crate::error::{Error, Result};
use crate::models::Budget;

impl MemoryStore {
    pub(super) fn set_budget(&self, budget: Budget) -> Result<Budget> {
        budget.validate()?;

        let mut data = self.write()?;
        upsert_into(&mut data.budgets, budget.clone());

        debug!(
            category = %budget.category,
            month = %budget.month,
            amount = budget.amount,
            "Upserted budget"
        );
        Ok(budget)
    }

    pub(super) fn remove_budget(&self, category: &str, month: &str) -> Result<()> {
        let mut data = self.write()?;
        let index = data
            .budgets
            .iter()
            .position(|b| b.matches(category, month))
            .ok_or_else(|| Error::NotFound(format!("budget {} for {}", category, month)))?;

        data.budgets.remove(index);
        debug!(category = %category, month = %month, "Deleted budget");
        Ok(())
    }
}

/// Keep at most one budget per `(category, month)`
pub(super) fn upsert_into(budgets: &mut Vec<Budget>, budget: Budget) {
    match budgets
        .iter_mut()
        .find(|b| b.matches(&budget.category, &budget.month))
    {
        Some(existing) => existing.amount = budget.amount,
        None => budgets.push(budget),
    }
}
