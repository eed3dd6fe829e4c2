//! Dashboard, stats and history commands

use crate::audit::AuditLogger;
use crate::display::{format_dashboard, format_expense_series};
use crate::error::FinanceResult;
use crate::storage::KeyValueStore;
use crate::store::FinanceStore;

/// Print the dashboard with `recent` transactions
pub fn handle_dashboard<K: KeyValueStore>(store: &FinanceStore<K>, recent: usize) -> FinanceResult<()> {
    let summary = store.summary(recent);
    print!("{}", format_dashboard(&summary, store.proverb_of_the_day()));
    Ok(())
}

pub fn handle_stats<K: KeyValueStore>(store: &FinanceStore<K>, json: bool) -> FinanceResult<()> {
    let series = store.expenses_by_date();
    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        print!("{}", format_expense_series(&series));
    }
    Ok(())
}

/// Print the most recent audit entries, oldest first
pub fn handle_history(logger: &AuditLogger, count: usize) -> FinanceResult<()> {
    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
