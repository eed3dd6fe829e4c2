//! Budget model
//!
//! A per-category spending cap with a running total of the expenses recorded
//! against it. The category is a plain string join against
//! `Transaction::category`; nothing enforces that it is unique or that any
//! transaction uses it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    pub category: String,

    /// Spending cap
    pub limit: Money,

    /// Accumulated expenses, maintained by the store as transactions come and
    /// go. Can drop below zero.
    pub current: Money,

    /// Presentation tag (a CSS class name in the original dashboard)
    pub color: String,

    #[serde(default)]
    pub description: String,
}

impl Budget {
    /// What is left before hitting the limit (negative when overspent)
    pub fn remaining(&self) -> Money {
        self.limit - self.current
    }

    pub fn is_over_limit(&self) -> bool {
        self.current > self.limit
    }

    /// Share of the limit already spent, in percent
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            return if self.current.amount() > 0 { 100.0 } else { 0.0 };
        }
        self.current.amount() as f64 / self.limit.amount() as f64 * 100.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.category, self.current, self.limit)
    }
}

/// Fields for a new budget; the store assigns the id and starts `current` at zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: String,
    pub limit: Money,
    pub color: String,
    #[serde(default)]
    pub description: String,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, limit: i64) -> Self {
        Self {
            category: category.into(),
            limit: Money::new(limit),
            color: String::new(),
            description: String::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn into_budget(self, id: BudgetId) -> Budget {
        Budget {
            id,
            category: self.category,
            limit: self.limit,
            current: Money::zero(),
            color: self.color,
            description: self.description,
        }
    }
}

/// Partial update; `None` fields are left untouched. `id` and `current`
/// cannot be changed this way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BudgetUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(Money::new(limit));
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.limit.is_none()
            && self.color.is_none()
            && self.description.is_none()
    }

    /// Shallow-merge the provided fields into `budget`
    pub fn apply_to(self, budget: &mut Budget) {
        if let Some(category) = self.category {
            budget.category = category;
        }
        if let Some(limit) = self.limit {
            budget.limit = limit;
        }
        if let Some(color) = self.color {
            budget.color = color;
        }
        if let Some(description) = self.description {
            budget.description = description;
        }
    }
}
