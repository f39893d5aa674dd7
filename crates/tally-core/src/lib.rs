//! Tally Core Library
//!
//! Shared functionality for the Tally personal finance tracker:
//! - Transaction and budget models
//! - Aggregation engine for reports, budget status and health score
//! - Storage abstraction with an in-memory store
//! - Layered TOML configuration

pub mod analytics;
pub mod config;
pub mod error;
pub mod models;
pub mod month;
pub mod store;

pub use analytics::{AnalysisContext, FinancialReport};
pub use config::{Config, ReportSettings, ServerSettings};
pub use error::{Error, Result};
pub use models::{Budget, NewTransaction, Snapshot, Transaction, TransactionType, TransactionUpdate};
pub use month::Month;
pub use store::{FinanceStore, MemoryStore, TransactionFilter};
