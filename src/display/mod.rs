//! Display formatting for terminal output

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{format_budget_details, format_budget_list, format_progress_bar};
pub use report::{format_dashboard, format_expense_series};
pub use transaction::{format_transaction_details, format_transaction_register, format_transaction_row};
