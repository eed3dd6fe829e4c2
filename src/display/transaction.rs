//! Transaction display formatting

use crate::models::{Transaction, TransactionKind};

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction) -> String {
    let kind_icon = match txn.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };

    format!(
        "{} {} {:24} {:14} {:>16}  {}",
        kind_icon,
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.label, 24),
        truncate(&txn.category, 14),
        txn.signed_amount(),
        txn.id
    )
}

/// Format a list of transactions as a register, newest first
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:10} {:24} {:14} {:>16}  {}\n",
        "Date", "Label", "Category", "Amount", "ID"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Label:       {}\n", txn.label));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", txn.amount));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M UTC")));

    output
}

/// Truncate to `max_len` characters, marking the cut with an ellipsis
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewTransaction, TransactionId};
    use chrono::{TimeZone, Utc};

    fn loyer() -> Transaction {
        let date = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        NewTransaction::expense("Loyer", 150000, "Bills", date).into_transaction(TransactionId::from("3"))
    }

    #[test]
    fn test_row() {
        let row = format_transaction_row(&loyer());
        assert!(row.starts_with("- 2025-01-15 Loyer"));
        assert!(row.contains("-150\u{202F}000"));
        assert!(row.ends_with(" 3"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_register_has_header() {
        let register = format_transaction_register(&[loyer()]);
        assert!(register.lines().next().unwrap().contains("Category"));
        assert_eq!(register.lines().count(), 3);
    }

    #[test]
    fn test_details() {
        let details = format_transaction_details(&loyer());
        assert!(details.contains("Type:        expense"));
        assert!(details.contains("Category:    Bills"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Bubble Tea", 24), "Bubble Tea");
        assert_eq!(truncate("Allocation Mensuelle", 10), "Allocatio…");
        assert_eq!(truncate("Épargné", 4), "Épa…");
    }
}
