//! Transaction list filtering
//!
//! Backs the searchable transaction table: free-text search over description
//! and category, exact category and type filters, newest first.

use serde::Deserialize;

use crate::models::{Transaction, TransactionType};

/// Filter for transaction lists; empty filter matches everything
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransactionFilter {
    /// Case-insensitive substring of description or category
    pub search: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

impl TransactionFilter {
    /// Create a new filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                tx.description.to_lowercase().contains(&term)
                    || tx.category.to_lowercase().contains(&term)
            }
        };

        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| tx.category == category);

        let matches_kind = self.kind.map_or(true, |kind| tx.kind == kind);

        matches_search && matches_category && matches_kind
    }

    /// Matching transactions, date descending (ties keep input order)
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut matched: Vec<&Transaction> =
            transactions.iter().filter(|t| self.matches(t)).collect();
        matched.sort_by(|a, b| b.date.cmp(&a.date));
        matched
    }
}

/// Net of a list: income adds, expense subtracts
pub fn net_total<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> f64 {
    transactions.into_iter().map(Transaction::signed_amount).sum()
}

/// Categories present in `transactions`, in first-seen order
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for tx in transactions {
        if !seen.iter().any(|c| c == &tx.category) {
            seen.push(tx.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_snapshot;

    #[test]
    fn test_empty_filter_sorts_newest_first() {
        let snapshot = sample_snapshot();
        let result = TransactionFilter::new().apply(&snapshot.transactions);

        assert_eq!(result.len(), 5);
        let dates: Vec<&str> = result.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2024-01-15", "2024-01-14", "2024-01-13", "2024-01-12", "2024-01-11"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_over_description_and_category() {
        let snapshot = sample_snapshot();

        let by_description = TransactionFilter::new()
            .search("COFFEE")
            .apply(&snapshot.transactions);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "5");

        let by_category = TransactionFilter::new()
            .search("dining")
            .apply(&snapshot.transactions);
        assert_eq!(by_category.len(), 2);
    }

    #[test]
    fn test_category_and_type_filters_combine() {
        let snapshot = sample_snapshot();

        let food = TransactionFilter::new()
            .category("Food & Dining")
            .kind(TransactionType::Expense)
            .apply(&snapshot.transactions);
        assert_eq!(food.len(), 2);

        let income_food = TransactionFilter::new()
            .category("Food & Dining")
            .kind(TransactionType::Income)
            .apply(&snapshot.transactions);
        assert!(income_food.is_empty());
    }

    #[test]
    fn test_net_total_of_filtered_rows() {
        let snapshot = sample_snapshot();
        let all = TransactionFilter::new().apply(&snapshot.transactions);
        let net = net_total(all.iter().copied());
        assert!((net - (1200.0 - 45.5 - 25.0 - 89.99 - 15.75)).abs() < 1e-9);

        assert_eq!(net_total(Vec::<&Transaction>::new()), 0.0);
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let snapshot = sample_snapshot();
        assert_eq!(
            distinct_categories(&snapshot.transactions),
            vec![
                "Income".to_string(),
                "Food & Dining".to_string(),
                "Transportation".to_string(),
                "Bills & Utilities".to_string(),
            ]
        );
    }
}
