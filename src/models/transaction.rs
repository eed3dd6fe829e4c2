//! Transaction model
//!
//! A single money movement tagged as income or expense. Transactions are
//! immutable once recorded; the only way to change one is to delete it.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("unknown transaction type '{}'", other)),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Free-form description
    pub label: String,

    /// Amount in minor units, never signed by kind
    pub amount: Money,

    /// Category name, matched against budget categories by string equality
    pub category: String,

    #[serde(with = "iso_timestamp")]
    pub date: DateTime<Utc>,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Amount with its sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.label,
            self.signed_amount()
        )
    }
}

/// Everything needed to record a transaction except its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub label: String,
    pub amount: Money,
    pub category: String,
    #[serde(with = "iso_timestamp")]
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn expense(
        label: impl Into<String>,
        amount: i64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            label: label.into(),
            amount: Money::new(amount),
            category: category.into(),
            date,
            kind: TransactionKind::Expense,
        }
    }

    pub fn income(
        label: impl Into<String>,
        amount: i64,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            label: label.into(),
            amount: Money::new(amount),
            category: category.into(),
            date,
            kind: TransactionKind::Income,
        }
    }

    /// Attach an id, producing the stored record
    ///
    /// The date is truncated to the millisecond precision snapshots keep.
    pub fn into_transaction(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            label: self.label,
            amount: self.amount,
            category: self.category,
            date: self.date.trunc_subsecs(3),
            kind: self.kind,
        }
    }
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix.
///
/// Reading accepts any RFC 3339 offset and normalizes to UTC.
pub mod iso_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|d| d.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Render a timestamp the same way snapshots store it
pub fn to_iso_string(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}
