//! Derived, read-only views over the store's collections
//!
//! Nothing here is cached: every report is recomputed from the current
//! transactions and budgets.

pub mod expenses;
pub mod summary;

pub use expenses::{ExpenseBucket, ExpenseSeries, DAILY_WINDOW, MONTHLY_WINDOW};
pub use summary::{total_balance, total_expenses, total_income, BudgetStatus, Summary};
