//! Dashboard summary
//!
//! Balance, income and expense totals over the whole transaction list, plus
//! where each budget stands.

use serde::Serialize;

use crate::models::{Budget, Money, Transaction, TransactionKind};

/// Sum of income minus sum of expenses
pub fn total_balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}

pub fn total_income(transactions: &[Transaction]) -> Money {
    total_of_kind(transactions, TransactionKind::Income)
}

pub fn total_expenses(transactions: &[Transaction]) -> Money {
    total_of_kind(transactions, TransactionKind::Expense)
}

fn total_of_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Where a single budget stands
#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub remaining: Money,
    pub percent_used: f64,
    pub over_limit: bool,
}

impl BudgetStatus {
    pub fn new(budget: &Budget) -> Self {
        Self {
            remaining: budget.remaining(),
            percent_used: budget.percent_used(),
            over_limit: budget.is_over_limit(),
            budget: budget.clone(),
        }
    }
}

/// Everything the dashboard shows apart from the proverb
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub balance: Money,
    pub income: Money,
    pub expenses: Money,
    pub transaction_count: usize,
    /// Newest first
    pub recent: Vec<Transaction>,
    pub budgets: Vec<BudgetStatus>,
}

impl Summary {
    /// Build a summary; `recent_count` caps the recent transaction list
    pub fn generate(transactions: &[Transaction], budgets: &[Budget], recent_count: usize) -> Self {
        Self {
            balance: total_balance(transactions),
            income: total_income(transactions),
            expenses: total_expenses(transactions),
            transaction_count: transactions.len(),
            recent: transactions.iter().take(recent_count).cloned().collect(),
            budgets: budgets.iter().map(BudgetStatus::new).collect(),
        }
    }

    pub fn over_limit_count(&self) -> usize {
        self.budgets.iter().filter(|b| b.over_limit).count()
    }
}
