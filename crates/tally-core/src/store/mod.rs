//! Transaction and budget storage
//!
//! The analytics engine never owns data. It is handed snapshots taken from a
//! [`FinanceStore`]. This module is organized by domain:
//! - `transactions` - Transaction CRUD
//! - `budgets` - Budget upsert/delete
//! - `filter` - Search/category/type filtering for transaction lists
//! - `sample` - Demo data set

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::models::{Budget, NewTransaction, Snapshot, Transaction, TransactionUpdate};

mod budgets;
mod filter;
mod sample;
mod transactions;

pub use filter::{distinct_categories, net_total, TransactionFilter};
pub use sample::sample_snapshot;

/// Store interface consumed by the server and CLI
pub trait FinanceStore: Send + Sync {
    /// All transactions, newest first
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    fn get_transaction(&self, id: &str) -> Result<Transaction>;

    /// Assign an id and insert
    fn create_transaction(&self, new: NewTransaction) -> Result<Transaction>;

    /// Merge `update` onto the transaction with `id`
    fn update_transaction(&self, id: &str, update: TransactionUpdate) -> Result<Transaction>;

    fn delete_transaction(&self, id: &str) -> Result<()>;

    fn list_budgets(&self) -> Result<Vec<Budget>>;

    /// Insert, or replace the amount of the budget with the same `(category, month)`
    fn upsert_budget(&self, budget: Budget) -> Result<Budget>;

    fn delete_budget(&self, category: &str, month: &str) -> Result<()>;

    /// Copy of everything the store holds
    fn snapshot(&self) -> Result<Snapshot> {
        Ok(Snapshot {
            transactions: self.list_transactions()?,
            budgets: self.list_budgets()?,
        })
    }
}

/// In-memory store; cloning shares the same data
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `snapshot`
    ///
    /// Budgets are folded through upsert, so a later duplicate
    /// `(category, month)` replaces an earlier one.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut budgets: Vec<Budget> = Vec::with_capacity(snapshot.budgets.len());
        for budget in snapshot.budgets {
            budgets::upsert_into(&mut budgets, budget);
        }

        Self {
            inner: Arc::new(RwLock::new(Snapshot {
                transactions: snapshot.transactions,
                budgets,
            })),
        }
    }

    /// Create a store seeded with the demo data set
    pub fn with_sample_data() -> Self {
        Self::from_snapshot(sample_snapshot())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Snapshot>> {
        self.inner
            .read()
            .map_err(|_| Error::Store("store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Snapshot>> {
        self.inner
            .write()
            .map_err(|_| Error::Store("store lock poisoned".to_string()))
    }
}

impl FinanceStore for MemoryStore {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.read()?.transactions.clone())
    }

    fn get_transaction(&self, id: &str) -> Result<Transaction> {
        self.find_transaction(id)
    }

    fn create_transaction(&self, new: NewTransaction) -> Result<Transaction> {
        self.insert_transaction(new)
    }

    fn update_transaction(&self, id: &str, update: TransactionUpdate) -> Result<Transaction> {
        self.merge_transaction(id, update)
    }

    fn delete_transaction(&self, id: &str) -> Result<()> {
        self.remove_transaction(id)
    }

    fn list_budgets(&self) -> Result<Vec<Budget>> {
        Ok(self.read()?.budgets.clone())
    }

    fn upsert_budget(&self, budget: Budget) -> Result<Budget> {
        self.set_budget(budget)
    }

    fn delete_budget(&self, category: &str, month: &str) -> Result<()> {
        self.remove_budget(category, month)
    }

    fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.read()?.clone())
    }
}
