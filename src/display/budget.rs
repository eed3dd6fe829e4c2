//! Budget display formatting

use crate::models::Budget;
use crate::reports::BudgetStatus;

use super::transaction::truncate;

const BAR_WIDTH: usize = 20;

/// Progress bar for a budget, capped at full width
pub fn format_progress_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Format budgets as a table with spending progress
pub fn format_budget_list(statuses: &[BudgetStatus]) -> String {
    if statuses.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let cat_width = statuses
        .iter()
        .map(|s| s.budget.category.chars().count())
        .max()
        .unwrap_or(8)
        .clamp(8, 24);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<cat_width$}  {:>16}  {:>16}  {:<22}  {:>5}  {}\n",
        "Category",
        "Spent",
        "Limit",
        "Progress",
        "%",
        "ID",
        cat_width = cat_width,
    ));
    output.push_str(&format!("{}\n", "-".repeat(cat_width + 72)));

    for status in statuses {
        let marker = if status.over_limit { " !" } else { "" };
        output.push_str(&format!(
            "{:<cat_width$}  {:>16}  {:>16}  {}  {:>4.0}%  {}{}\n",
            truncate(&status.budget.category, cat_width),
            status.budget.current,
            status.budget.limit,
            format_progress_bar(status.percent_used),
            status.percent_used,
            status.budget.id,
            marker,
            cat_width = cat_width,
        ));
    }

    output
}

pub fn format_budget_details(budget: &Budget) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget:      {}\n", budget.id));
    output.push_str(&format!("Category:    {}\n", budget.category));
    output.push_str(&format!("Limit:       {}\n", budget.limit));
    output.push_str(&format!("Spent:       {}\n", budget.current));
    output.push_str(&format!("Remaining:   {}\n", budget.remaining()));
    if !budget.color.is_empty() {
        output.push_str(&format!("Color:       {}\n", budget.color));
    }
    if !budget.description.is_empty() {
        output.push_str(&format!("Description: {}\n", budget.description));
    }

    output
}
