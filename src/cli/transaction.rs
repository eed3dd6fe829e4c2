//! Transaction CLI commands

use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;

use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, NewTransaction, TransactionId, TransactionKind, MAX_AMOUNT};
use crate::storage::KeyValueStore;
use crate::store::FinanceStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Description, e.g. "Courses"
        label: String,
        /// Amount in francs (e.g. "25000" or "25 000")
        amount: String,
        /// Category name; expenses count against the budget of the same name
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Date (YYYY-MM-DD or RFC 3339); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one transaction
    Show {
        id: String,
    },

    /// Delete a transaction
    #[command(alias = "rm")]
    Remove {
        id: String,
    },
}

pub fn handle_transaction_command<K: KeyValueStore>(
    store: &mut FinanceStore<K>,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    match cmd {
        TransactionCommands::Add {
            label,
            amount,
            category,
            kind,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let kind: TransactionKind = kind.parse().map_err(FinanceError::Validation)?;
            let date = match date {
                Some(raw) => parse_date(&raw)?,
                None => Utc::now(),
            };

            let data = NewTransaction {
                label,
                amount,
                category,
                date,
                kind,
            };
            let txn = store.add_transaction(data)?;

            println!("Recorded {}: {} ({})", txn.kind, txn.label, txn.amount);
            if txn.is_expense() {
                if let Some(budget) = store.budget_for_category(&txn.category) {
                    println!(
                        "  Budget '{}': {} / {}",
                        budget.category, budget.current, budget.limit
                    );
                }
            }
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List { limit, category } => {
            let transactions: Vec<_> = store
                .transactions()
                .iter()
                .filter(|t| category.as_deref().map_or(true, |c| t.category == c))
                .take(limit)
                .cloned()
                .collect();
            print!("{}", format_transaction_register(&transactions));
        }

        TransactionCommands::Show { id } => {
            let id = TransactionId::from(id.trim());
            let txn = store
                .transaction(&id)
                .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;
            print!("{}", format_transaction_details(txn));
        }

        TransactionCommands::Remove { id } => {
            let id = TransactionId::from(id.trim());
            let removed = store
                .remove_transaction(&id)?
                .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;
            println!("Deleted transaction: {} ({})", removed.label, removed.amount);
        }
    }

    Ok(())
}

/// Parse a non-negative amount typed on the command line
pub(crate) fn parse_amount(raw: &str) -> FinanceResult<Money> {
    let amount = Money::parse(raw).map_err(|e| FinanceError::Validation(e.to_string()))?;
    if amount.is_negative() {
        return Err(FinanceError::Validation(format!(
            "Amount must not be negative: {}",
            raw
        )));
    }
    if !amount.is_within_limit() {
        return Err(FinanceError::Validation(format!(
            "Amount must not exceed {}: {}",
            MAX_AMOUNT, raw
        )));
    }
    Ok(amount)
}

/// Accept a full RFC 3339 timestamp or a bare date (taken at noon UTC)
pub(crate) fn parse_date(raw: &str) -> FinanceResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|d| d.and_utc())
        .ok_or_else(|| FinanceError::Validation(format!("Invalid date: {}", raw)))
}
