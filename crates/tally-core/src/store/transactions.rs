//! Transaction CRUD for the in-memory store

use tracing::debug;

use super::MemoryStore;
use crate::error::{Error, Result};
use crate::models::{NewTransaction, Transaction, TransactionUpdate};

impl MemoryStore {
    pub(super) fn find_transaction(&self, id: &str) -> Result<Transaction> {
        self.read()?
            .transactions
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Validate, assign a fresh id, and prepend (lists are newest first)
    pub(super) fn insert_transaction(&self, new: NewTransaction) -> Result<Transaction> {
        new.validate()?;

        let transaction = new.into_transaction(uuid::Uuid::new_v4().to_string());
        self.write()?.transactions.insert(0, transaction.clone());

        debug!(
            id = %transaction.id,
            kind = transaction.kind.as_str(),
            amount = transaction.amount,
            "Created transaction"
        );
        Ok(transaction)
    }

    pub(super) fn merge_transaction(
        &self,
        id: &str,
        update: TransactionUpdate,
    ) -> Result<Transaction> {
        let mut data = self.write()?;
        let slot = data
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(id))?;

        let merged = update.apply(slot)?;
        *slot = merged.clone();

        debug!(id = %id, "Updated transaction");
        Ok(merged)
    }

    pub(super) fn remove_transaction(&self, id: &str) -> Result<()> {
        let mut data = self.write()?;
        let index = data
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| not_found(id))?;

        data.transactions.remove(index);
        debug!(id = %id, "Deleted transaction");
        Ok(())
    }
}

fn not_found(id: &str) -> Error {
    Error::NotFound(format!("transaction {}", id))
}
