//! Expense series by day and by month
//!
//! Feeds the stats view: expense amounts bucketed by UTC calendar day and by
//! local year-month, each keeping only the most recent buckets.

use std::collections::BTreeMap;

use chrono::{Datelike, Local, TimeZone};
use serde::Serialize;

use crate::models::{Money, Transaction};

/// Number of daily buckets kept
pub const DAILY_WINDOW: usize = 7;

/// Number of monthly buckets kept
pub const MONTHLY_WINDOW: usize = 6;

/// One bucket of a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseBucket {
    /// `YYYY-MM-DD` or `YYYY-MM`
    pub key: String,
    pub total: Money,
}

impl ExpenseBucket {
    fn new(key: String, total: Money) -> Self {
        Self { key, total }
    }
}

/// Daily and monthly expense totals, ascending by key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseSeries {
    pub daily: Vec<ExpenseBucket>,
    pub monthly: Vec<ExpenseBucket>,
}

impl ExpenseSeries {
    /// Bucket the expense transactions of `transactions`, months in local time
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self::from_transactions_in(transactions, &Local)
    }

    /// Like `from_transactions`, with months taken in `tz`
    pub fn from_transactions_in<Tz: TimeZone>(transactions: &[Transaction], tz: &Tz) -> Self {
        // Keys are zero-padded, so lexical order is chronological order.
        let mut daily: BTreeMap<String, Money> = BTreeMap::new();
        let mut monthly: BTreeMap<String, Money> = BTreeMap::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            let day_key = txn.date.format("%Y-%m-%d").to_string();
            let local = txn.date.with_timezone(tz);
            let month_key = format!("{:04}-{:02}", local.year(), local.month());

            *daily.entry(day_key).or_default() += txn.amount;
            *monthly.entry(month_key).or_default() += txn.amount;
        }

        Self {
            daily: last_buckets(daily, DAILY_WINDOW),
            monthly: last_buckets(monthly, MONTHLY_WINDOW),
        }
    }

    /// Largest daily total, handy for scaling bars
    pub fn daily_peak(&self) -> Money {
        self.daily.iter().map(|b| b.total).max().unwrap_or_default()
    }

    pub fn monthly_peak(&self) -> Money {
        self.monthly.iter().map(|b| b.total).max().unwrap_or_default()
    }
}

fn last_buckets(buckets: BTreeMap<String, Money>, window: usize) -> Vec<ExpenseBucket> {
    let skip = buckets.len().saturating_sub(window);
    buckets
        .into_iter()
        .skip(skip)
        .map(|(key, total)| ExpenseBucket::new(key, total))
        .collect()
}
