//! CLI command handlers
//!
//! Bridge clap argument parsing with the finance store.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_dashboard, handle_history, handle_stats};
pub use transaction::{handle_transaction_command, TransactionCommands};
