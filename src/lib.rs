//! Finance Tracker - personal income, expense and budget tracking
//!
//! This library provides the core of a single-user finance tracker. Amounts
//! are whole CFA francs. Transactions and budgets live in a [`FinanceStore`]
//! that keeps every budget's running total in step with the expenses recorded
//! against its category and writes a JSON snapshot of each collection to a
//! key-value store after every change.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and settings
//! - `error`: Custom error types
//! - `models`: Transactions, budgets, money and proverbs
//! - `storage`: Key-value stores and the JSON snapshot format
//! - `audit`: Audit logging of every mutation
//! - `store`: The finance store and its seed data
//! - `reports`: Totals, expense series and the dashboard summary
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `finance` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::models::NewTransaction;
//! use finance_tracker::storage::MemoryStore;
//! use finance_tracker::store::{FinanceStore, StoreOptions};
//!
//! let mut store = FinanceStore::open(MemoryStore::default(), StoreOptions::new())?;
//! store.add_transaction(NewTransaction::expense("Taxi", 3000, "Transport", chrono::Utc::now()))?;
//! println!("{}", FinanceStore::<MemoryStore>::format_cfa(store.total_balance().amount()));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;

pub use error::{FinanceError, FinanceResult};
pub use models::{Budget, Money, Transaction, TransactionKind};
pub use store::{FinanceStore, StoreOptions};
