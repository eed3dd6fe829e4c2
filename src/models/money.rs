//! Money type for CFA franc amounts
//!
//! The West African CFA franc (XOF) has no subunit in everyday use, so an
//! amount is a plain integer number of francs. Formatting follows the fr-FR
//! convention: digit groups of three separated by a narrow no-break space,
//! then a no-break space and the `F CFA` symbol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Group separator used between thousands (U+202F NARROW NO-BREAK SPACE)
pub const GROUP_SEPARATOR: char = '\u{202F}';

/// Currency symbol, including its inner no-break space
pub const CFA_SYMBOL: &str = "F\u{00A0}CFA";

/// Largest amount a single transaction or budget limit may carry
///
/// Keeps totals over any realistic number of entries far from `i64` limits.
pub const MAX_AMOUNT: i64 = 999_999_999_999_999;

/// An amount in minor units (whole francs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw integer amount
    pub const fn amount(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Whether the magnitude is within `MAX_AMOUNT`
    pub const fn is_within_limit(&self) -> bool {
        self.0.unsigned_abs() <= MAX_AMOUNT as u64
    }

    /// Parse an amount typed by a user
    ///
    /// Accepts "25000", "25 000", "25_000", "-4500" and an optional trailing
    /// "F CFA", "FCFA" or "XOF".
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let without_symbol = ["F\u{00A0}CFA", "F CFA", "FCFA", "XOF"]
            .iter()
            .find_map(|sym| trimmed.strip_suffix(sym))
            .unwrap_or(trimmed)
            .trim_end();

        let (negative, digits) = match without_symbol.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, without_symbol),
        };

        let cleaned: String = digits
            .chars()
            .filter(|c| !matches!(*c, ' ' | '_' | '\u{00A0}' | GROUP_SEPARATOR))
            .collect();

        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value: i64 = cleaned
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Format as a localized CFA franc string, e.g. `25 000 F CFA`
    pub fn format_cfa(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(GROUP_SEPARATOR);
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}\u{00A0}{}", sign, grouped, CFA_SYMBOL)
    }
}

/// Format an integer amount as CFA francs
pub fn format_cfa(amount: i64) -> String {
    Money::new(amount).format_cfa()
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad through the formatter so `{:>12}` aligns columns.
        f.pad(&self.format_cfa())
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
