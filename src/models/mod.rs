//! Core data models
//!
//! Transactions, category budgets, proverbs and the `Money` amount type.

pub mod budget;
pub mod ids;
pub mod money;
pub mod proverb;
pub mod transaction;

pub use budget::{Budget, BudgetUpdate, NewBudget};
pub use ids::{BudgetId, TransactionId};
pub use money::{format_cfa, Money, MoneyParseError, MAX_AMOUNT};
pub use proverb::Proverb;
pub use transaction::{NewTransaction, Transaction, TransactionKind};
