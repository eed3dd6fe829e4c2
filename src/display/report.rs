//! Dashboard and stats formatting

use crate::models::{Money, Proverb};
use crate::reports::{ExpenseBucket, ExpenseSeries, Summary};

use super::budget::format_budget_list;
use super::transaction::format_transaction_register;

const CHART_WIDTH: usize = 30;

/// The dashboard: totals, proverb of the day, recent activity and budgets
pub fn format_dashboard(summary: &Summary, proverb: &Proverb) -> String {
    let mut output = String::new();

    output.push_str("Tableau de bord\n");
    output.push_str(&format!("{}\n", "=".repeat(40)));
    output.push_str(&format!("Solde:     {:>18}\n", summary.balance));
    output.push_str(&format!("Revenus:   {:>18}\n", summary.income));
    output.push_str(&format!("Dépenses:  {:>18}\n", summary.expenses));
    output.push('\n');
    output.push_str(&format!("{}\n", proverb));
    output.push('\n');

    output.push_str(&format!(
        "Dernières transactions ({} sur {})\n",
        summary.recent.len(),
        summary.transaction_count
    ));
    output.push_str(&format_transaction_register(&summary.recent));
    output.push('\n');

    output.push_str("Budgets\n");
    output.push_str(&format_budget_list(&summary.budgets));

    let over = summary.over_limit_count();
    if over > 0 {
        output.push_str(&format!("\n{} budget(s) over limit\n", over));
    }

    output
}

/// Horizontal bar chart of daily and monthly expenses
pub fn format_expense_series(series: &ExpenseSeries) -> String {
    let mut output = String::new();

    output.push_str("Dépenses par jour\n");
    output.push_str(&format_chart(&series.daily, series.daily_peak()));
    output.push('\n');
    output.push_str("Dépenses par mois\n");
    output.push_str(&format_chart(&series.monthly, series.monthly_peak()));

    output
}

fn format_chart(buckets: &[ExpenseBucket], peak: Money) -> String {
    if buckets.is_empty() {
        return "  (aucune dépense)\n".to_string();
    }

    let mut output = String::new();
    for bucket in buckets {
        let width = if peak.amount() > 0 {
            (bucket.total.amount() as f64 / peak.amount() as f64 * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        output.push_str(&format!(
            "  {:<10} {:<chart$} {:>16}\n",
            bucket.key,
            "█".repeat(width),
            bucket.total,
            chart = CHART_WIDTH,
        ));
    }
    output
}
