//! Domain models for Tally

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::month::Month;

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single dated money movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque id assigned by the store, never changes
    pub id: String,
    /// Always non-negative; direction comes from `kind`
    pub amount: f64,
    /// ISO `YYYY-MM-DD`, kept as text so month bucketing is a prefix match
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount signed by direction (income positive, expense negative)
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// `YYYY-MM` bucket of the date, if the date is long enough to have one
    pub fn month_key(&self) -> Option<&str> {
        self.date.get(..7)
    }
}

/// A transaction before the store assigns it an id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl NewTransaction {
    /// Check the fields a write must satisfy
    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)?;
        validate_date(&self.date)?;
        validate_category(&self.category)
    }

    pub fn into_transaction(self, id: String) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            date: self.date,
            description: self.description,
            category: self.category,
            kind: self.kind,
        }
    }
}

/// Partial update; absent fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
}

impl TransactionUpdate {
    /// Merge onto an existing transaction, validating the result
    pub fn apply(self, current: &Transaction) -> Result<Transaction> {
        let merged = Transaction {
            id: current.id.clone(),
            amount: self.amount.unwrap_or(current.amount),
            date: self.date.unwrap_or_else(|| current.date.clone()),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            category: self.category.unwrap_or_else(|| current.category.clone()),
            kind: self.kind.unwrap_or(current.kind),
        };

        validate_amount(merged.amount)?;
        validate_date(&merged.date)?;
        validate_category(&merged.category)?;
        Ok(merged)
    }
}

/// A per-category spending ceiling for one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub amount: f64,
    /// `YYYY-MM`
    pub month: String,
}

impl Budget {
    pub fn new(category: impl Into<String>, amount: f64, month: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            month: month.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_amount(self.amount)?;
        validate_category(&self.category)?;
        let month = self.month.parse::<Month>().map_err(Error::Validation)?;
        // Stored text is the upsert key, so only the canonical spelling is allowed
        if month.to_string() != self.month {
            return Err(Error::Validation(format!(
                "invalid month '{}' (use YYYY-MM)",
                self.month
            )));
        }
        Ok(())
    }

    /// Whether this budget is keyed the same as `(category, month)`
    pub fn matches(&self, category: &str, month: &str) -> bool {
        self.category == category && self.month == month
    }
}

/// Point-in-time copy of everything a store holds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::Validation(format!(
            "amount must be a non-negative number, got {}",
            amount
        )));
    }
    Ok(())
}

fn validate_date(date: &str) -> Result<()> {
    let invalid = || Error::Validation(format!("invalid date '{}' (use YYYY-MM-DD)", date));
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| invalid())?;
    // chrono accepts one-digit fields, which would break month prefix matching
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(invalid());
    }
    Ok(())
}

fn validate_category(category: &str) -> Result<()> {
    if category.trim().is_empty() {
        return Err(Error::Validation("category is required".to_string()));
    }
    Ok(())
}
