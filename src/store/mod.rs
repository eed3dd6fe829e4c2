//! The finance store
//!
//! Owns the transaction and budget collections, keeps each budget's running
//! total in step with the expense transactions recorded against its
//! category, and writes a fresh snapshot of every collection it changes.
//!
//! Budgets and transactions are joined by exact category string equality
//! only. A transaction whose category matches no budget is still recorded;
//! it just doesn't move any running total. When several budgets share a
//! category only the first one is adjusted.
//!
//! Looking up a missing id is never an error: the mutation is a no-op and
//! returns `None`.

pub mod seed;

use chrono::{Datelike, Local, NaiveDate, Utc};
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::settings::SnapshotPolicy;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    Budget, BudgetId, BudgetUpdate, Money, NewBudget, NewTransaction, Proverb,
    Transaction, TransactionId, MAX_AMOUNT,
};
use crate::reports::{self, ExpenseSeries, Summary};
use crate::storage::snapshot::{self, Snapshot};
use crate::storage::{KeyValueStore, BUDGETS_KEY, TRANSACTIONS_KEY};

/// How a store is opened
#[derive(Default)]
pub struct StoreOptions {
    pub snapshot_policy: SnapshotPolicy,
    /// Where to record mutations, if anywhere
    pub audit: Option<AuditLogger>,
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot_policy(mut self, policy: SnapshotPolicy) -> Self {
        self.snapshot_policy = policy;
        self
    }

    pub fn audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }
}

pub struct FinanceStore<K: KeyValueStore> {
    kv: K,
    /// Newest first
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    proverbs: Vec<Proverb>,
    audit: Option<AuditLogger>,
}

impl<K: KeyValueStore> FinanceStore<K> {
    /// Load both collections from `kv`, seeding whichever is absent
    ///
    /// Seed data is not written back until the first mutation touches that
    /// collection.
    pub fn open(kv: K, options: StoreOptions) -> FinanceResult<Self> {
        let now = Utc::now();
        let transactions = load_or_seed(&kv, TRANSACTIONS_KEY, options.snapshot_policy, || {
            seed::transactions(now)
        })?;
        let budgets = load_or_seed(&kv, BUDGETS_KEY, options.snapshot_policy, seed::budgets)?;

        debug!(
            transactions = transactions.len(),
            budgets = budgets.len(),
            "opened finance store"
        );

        Ok(Self::with_collections(kv, transactions, budgets, options.audit))
    }

    /// Build a store around collections the caller already has
    ///
    /// Nothing is persisted until the first mutation.
    pub fn with_collections(
        kv: K,
        transactions: Vec<Transaction>,
        budgets: Vec<Budget>,
        audit: Option<AuditLogger>,
    ) -> Self {
        Self {
            kv,
            transactions,
            budgets,
            proverbs: seed::proverbs(),
            audit,
        }
    }

    /// Transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Budgets in insertion order
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn proverbs(&self) -> &[Proverb] {
        &self.proverbs
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    pub fn budget(&self, id: &BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| &b.id == id)
    }

    /// The budget a transaction in `category` counts against
    pub fn budget_for_category(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Record a transaction as the most recent one
    ///
    /// An expense also raises the running total of the budget for its
    /// category, if there is one. Both snapshots are written before the
    /// in-memory collections change.
    pub fn add_transaction(&mut self, data: NewTransaction) -> FinanceResult<Transaction> {
        check_amount("Transaction amount", data.amount)?;
        let txn = data.into_transaction(TransactionId::generate());

        let mut transactions = Vec::with_capacity(self.transactions.len() + 1);
        transactions.push(txn.clone());
        transactions.extend(self.transactions.iter().cloned());

        let adjusted = if txn.is_expense() {
            self.adjusted_budgets(&txn.category, txn.amount)
        } else {
            None
        };

        let mut entries = vec![AuditEntry::created(&txn)];
        self.commit(transactions, adjusted, &mut entries)?;
        self.record(&entries);

        debug!(id = %txn.id, kind = %txn.kind, amount = txn.amount.amount(), "added transaction");
        Ok(txn)
    }

    /// Delete a transaction, undoing its effect on the matching budget
    ///
    /// The running total is not clamped and may go negative.
    pub fn remove_transaction(&mut self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        let Some(removed) = self.transaction(id).cloned() else {
            debug!(%id, "remove_transaction: no such transaction");
            return Ok(None);
        };

        let transactions: Vec<_> = self
            .transactions
            .iter()
            .filter(|t| &t.id != id)
            .cloned()
            .collect();
        let adjusted = if removed.is_expense() {
            self.adjusted_budgets(&removed.category, -removed.amount)
        } else {
            None
        };

        let mut entries = vec![AuditEntry::deleted(&removed)];
        self.commit(transactions, adjusted, &mut entries)?;
        self.record(&entries);

        debug!(%id, "removed transaction");
        Ok(Some(removed))
    }

    /// Append a budget with an empty running total
    pub fn add_budget(&mut self, data: NewBudget) -> FinanceResult<Budget> {
        check_amount("Budget limit", data.limit)?;
        let budget = data.into_budget(BudgetId::generate());

        let mut budgets = self.budgets.clone();
        budgets.push(budget.clone());
        snapshot::save(&mut self.kv, BUDGETS_KEY, &budgets)?;
        self.budgets = budgets;
        self.record(&[AuditEntry::created(&budget)]);

        debug!(id = %budget.id, category = %budget.category, "added budget");
        Ok(budget)
    }

    /// Merge `update` into the budget with `id`
    pub fn update_budget(
        &mut self,
        id: &BudgetId,
        update: BudgetUpdate,
    ) -> FinanceResult<Option<Budget>> {
        if let Some(limit) = update.limit {
            check_amount("Budget limit", limit)?;
        }
        let Some(index) = self.budgets.iter().position(|b| &b.id == id) else {
            debug!(%id, "update_budget: no such budget");
            return Ok(None);
        };

        let mut budgets = self.budgets.clone();
        let before = budgets[index].clone();
        update.apply_to(&mut budgets[index]);
        let after = budgets[index].clone();

        snapshot::save(&mut self.kv, BUDGETS_KEY, &budgets)?;
        self.budgets = budgets;
        self.record(&[AuditEntry::updated(&before, &after)]);

        debug!(%id, "updated budget");
        Ok(Some(after))
    }

    /// Delete a budget; transactions in its category are left alone
    pub fn remove_budget(&mut self, id: &BudgetId) -> FinanceResult<Option<Budget>> {
        let Some(removed) = self.budget(id).cloned() else {
            debug!(%id, "remove_budget: no such budget");
            return Ok(None);
        };

        let budgets: Vec<_> = self.budgets.iter().filter(|b| &b.id != id).cloned().collect();
        snapshot::save(&mut self.kv, BUDGETS_KEY, &budgets)?;
        self.budgets = budgets;
        self.record(&[AuditEntry::deleted(&removed)]);

        debug!(%id, "removed budget");
        Ok(Some(removed))
    }

    pub fn total_balance(&self) -> Money {
        reports::total_balance(&self.transactions)
    }

    pub fn total_expenses(&self) -> Money {
        reports::total_expenses(&self.transactions)
    }

    pub fn total_income(&self) -> Money {
        reports::total_income(&self.transactions)
    }

    pub fn expenses_by_date(&self) -> ExpenseSeries {
        ExpenseSeries::from_transactions(&self.transactions)
    }

    pub fn summary(&self, recent_count: usize) -> Summary {
        Summary::generate(&self.transactions, &self.budgets, recent_count)
    }

    /// Proverb for today's local calendar day
    pub fn proverb_of_the_day(&self) -> &Proverb {
        self.proverb_for(Local::now().date_naive())
    }

    pub fn proverb_for(&self, date: NaiveDate) -> &Proverb {
        // `proverbs` is always the non-empty seed list
        &self.proverbs[date.day() as usize % self.proverbs.len()]
    }

    /// Format an amount as CFA francs
    pub fn format_cfa(amount: i64) -> String {
        Money::new(amount).format_cfa()
    }

    /// A copy of the budgets with the first one in `category` shifted by
    /// `delta`, plus the audit entry for that change
    fn adjusted_budgets(&self, category: &str, delta: Money) -> Option<(Vec<Budget>, AuditEntry)> {
        let index = self.budgets.iter().position(|b| b.category == category)?;
        let mut budgets = self.budgets.clone();
        let before = budgets[index].clone();
        budgets[index].current += delta;
        debug!(id = %before.id, category, current = budgets[index].current.amount(), "adjusted budget");

        let entry = AuditEntry::updated(&before, &budgets[index]);
        Some((budgets, entry))
    }

    /// Persist the new transactions (and budgets, if any), then swap them in
    ///
    /// If the budgets snapshot can't be written, the previous transactions
    /// snapshot is restored so the stored running totals stay consistent.
    fn commit(
        &mut self,
        transactions: Vec<Transaction>,
        adjusted: Option<(Vec<Budget>, AuditEntry)>,
        entries: &mut Vec<AuditEntry>,
    ) -> FinanceResult<()> {
        snapshot::save(&mut self.kv, TRANSACTIONS_KEY, &transactions)?;

        if let Some((budgets, entry)) = adjusted {
            if let Err(e) = snapshot::save(&mut self.kv, BUDGETS_KEY, &budgets) {
                if let Err(restore) = snapshot::save(&mut self.kv, TRANSACTIONS_KEY, &self.transactions) {
                    warn!(error = %restore, "failed to restore transactions snapshot");
                }
                return Err(e);
            }
            self.budgets = budgets;
            entries.push(entry);
        }

        self.transactions = transactions;
        Ok(())
    }

    /// Append to the audit log; a failure here never undoes a saved change
    fn record(&self, entries: &[AuditEntry]) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entries) {
                warn!(error = %e, path = %logger.path().display(), "failed to write audit log");
            }
        }
    }
}

fn check_amount(what: &str, amount: Money) -> FinanceResult<()> {
    if amount.is_within_limit() {
        Ok(())
    } else {
        Err(FinanceError::Validation(format!(
            "{} {} exceeds the maximum of {}",
            what,
            amount.amount(),
            MAX_AMOUNT
        )))
    }
}

/// Read one collection, applying `policy` when its snapshot is unreadable
fn load_or_seed<T, K, F>(kv: &K, key: &str, policy: SnapshotPolicy, seed: F) -> FinanceResult<Vec<T>>
where
    T: serde::de::DeserializeOwned,
    K: KeyValueStore,
    F: FnOnce() -> Vec<T>,
{
    match snapshot::load(kv, key)? {
        Snapshot::Stored(items) => Ok(items),
        Snapshot::Missing => {
            debug!(key, "no snapshot, using seed data");
            Ok(seed())
        }
        Snapshot::Corrupt(reason) => match policy {
            SnapshotPolicy::Seed => {
                warn!(key, %reason, "snapshot is corrupt, falling back to seed data");
                Ok(seed())
            }
            SnapshotPolicy::Fail => Err(FinanceError::Snapshot {
                key: key.to_string(),
                reason,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{EntityType, Operation};
    use crate::models::TransactionKind;
    use crate::storage::MemoryStore;
    use chrono::{DateTime, Duration, TimeZone};
    use tempfile::TempDir;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap()
    }

    fn empty_store() -> FinanceStore<MemoryStore> {
        FinanceStore::with_collections(MemoryStore::new(), Vec::new(), Vec::new(), None)
    }

    fn store_with_food_budget() -> (FinanceStore<MemoryStore>, BudgetId) {
        let mut store = empty_store();
        let budget = store.add_budget(NewBudget::new("Food", 100000)).unwrap();
        (store, budget.id)
    }

    #[test]
    fn test_open_empty_kv_uses_seed() {
        let store = FinanceStore::open(MemoryStore::new(), StoreOptions::new()).unwrap();

        assert_eq!(store.transactions().len(), 5);
        assert_eq!(store.budgets().len(), 4);
        assert_eq!(store.proverbs().len(), 8);
        // Seeds are not written until something changes
        assert!(store.kv().is_empty());
    }

    #[test]
    fn test_income_and_expense_scenario() {
        let mut store = empty_store();
        store
            .add_transaction(NewTransaction::income("Allocation Mensuelle", 325000, "Income", date()))
            .unwrap();
        store
            .add_transaction(NewTransaction::expense("Loyer", 150000, "Bills", date()))
            .unwrap();

        assert_eq!(store.total_balance().amount(), 175000);
        assert_eq!(store.total_expenses().amount(), 150000);
        assert_eq!(store.total_income().amount(), 325000);
    }

    #[test]
    fn test_add_transaction_prepends() {
        let mut store = empty_store();
        store.add_transaction(NewTransaction::expense("a", 1, "x", date())).unwrap();
        let second = store.add_transaction(NewTransaction::expense("b", 2, "x", date())).unwrap();

        assert_eq!(store.transactions()[0].id, second.id);
        assert_eq!(store.transactions()[1].label, "a");
    }

    #[test]
    fn test_expense_updates_matching_budget() {
        let (mut store, budget_id) = store_with_food_budget();

        let txn = store
            .add_transaction(NewTransaction::expense("Bubble Tea", 4500, "Food", date()))
            .unwrap();
        assert_eq!(store.budget(&budget_id).unwrap().current.amount(), 4500);

        store.remove_transaction(&txn.id).unwrap();
        assert_eq!(store.budget(&budget_id).unwrap().current.amount(), 0);
    }

    #[test]
    fn test_income_does_not_touch_budget() {
        let (mut store, budget_id) = store_with_food_budget();
        let txn = store
            .add_transaction(NewTransaction::income("Remboursement", 4500, "Food", date()))
            .unwrap();
        assert!(store.budget(&budget_id).unwrap().current.is_zero());

        store.remove_transaction(&txn.id).unwrap();
        assert!(store.budget(&budget_id).unwrap().current.is_zero());
    }

    #[test]
    fn test_category_match_is_exact() {
        let (mut store, budget_id) = store_with_food_budget();
        store.add_transaction(NewTransaction::expense("x", 100, "food", date())).unwrap();
        store.add_transaction(NewTransaction::expense("x", 100, "Food ", date())).unwrap();

        assert!(store.budget(&budget_id).unwrap().current.is_zero());
        assert_eq!(store.transactions().len(), 2);
    }

    #[test]
    fn test_only_first_budget_of_category_moves() {
        let mut store = empty_store();
        let first = store.add_budget(NewBudget::new("Food", 1000)).unwrap();
        let second = store.add_budget(NewBudget::new("Food", 2000)).unwrap();

        store.add_transaction(NewTransaction::expense("x", 300, "Food", date())).unwrap();

        assert_eq!(store.budget(&first.id).unwrap().current.amount(), 300);
        assert!(store.budget(&second.id).unwrap().current.is_zero());
    }

    #[test]
    fn test_remove_can_drive_current_negative() {
        let budget = Budget {
            current: Money::new(100),
            ..NewBudget::new("Food", 1000).into_budget(BudgetId::from("b"))
        };
        let txn = NewTransaction::expense("x", 500, "Food", date()).into_transaction(TransactionId::from("t"));
        let mut store = FinanceStore::with_collections(MemoryStore::new(), vec![txn], vec![budget], None);

        store.remove_transaction(&TransactionId::from("t")).unwrap();

        assert_eq!(store.budget(&BudgetId::from("b")).unwrap().current.amount(), -400);
    }

    #[test]
    fn test_remove_missing_transaction_is_noop() {
        let mut store = FinanceStore::open(MemoryStore::new(), StoreOptions::new()).unwrap();
        let removed = store.remove_transaction(&TransactionId::from("nope")).unwrap();

        assert!(removed.is_none());
        assert_eq!(store.transactions().len(), 5);
        assert!(store.kv().is_empty());
    }

    #[test]
    fn test_balance_tracks_add_and_remove() {
        let mut store = empty_store();
        let mut ids = Vec::new();
        for (i, amount) in [1000, 250, 4000, 75].into_iter().enumerate() {
            let data = if i % 2 == 0 {
                NewTransaction::income("in", amount, "Income", date())
            } else {
                NewTransaction::expense("out", amount, "Misc", date())
            };
            ids.push(store.add_transaction(data).unwrap().id);
        }
        assert_eq!(store.total_balance().amount(), 1000 - 250 + 4000 - 75);

        store.remove_transaction(&ids[2]).unwrap();
        store.remove_transaction(&ids[1]).unwrap();
        assert_eq!(store.total_balance().amount(), 1000 - 75);
        assert_eq!(
            store.total_balance(),
            store.total_income() - store.total_expenses()
        );
    }

    #[test]
    fn test_add_budget_starts_at_zero_and_appends() {
        let mut store = FinanceStore::open(MemoryStore::new(), StoreOptions::new()).unwrap();
        let budget = store
            .add_budget(NewBudget::new("Food", 100000).with_color("bg-pastel-pink"))
            .unwrap();

        assert!(budget.current.is_zero());
        assert_eq!(store.budgets().last().unwrap().id, budget.id);
        assert_eq!(store.budgets().len(), 5);
    }

    #[test]
    fn test_update_budget() {
        let (mut store, id) = store_with_food_budget();
        store.add_transaction(NewTransaction::expense("x", 4500, "Food", date())).unwrap();

        let updated = store
            .update_budget(&id, BudgetUpdate::new().limit(80000).color("bg-pastel-mint"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.limit.amount(), 80000);
        assert_eq!(updated.color, "bg-pastel-mint");
        assert_eq!(updated.category, "Food");
        assert_eq!(updated.current.amount(), 4500);
    }

    #[test]
    fn test_update_missing_budget() {
        let mut store = empty_store();
        let result = store
            .update_budget(&BudgetId::from("nope"), BudgetUpdate::new().limit(1))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_remove_budget_keeps_transactions() {
        let (mut store, id) = store_with_food_budget();
        store.add_transaction(NewTransaction::expense("x", 4500, "Food", date())).unwrap();

        let removed = store.remove_budget(&id).unwrap();

        assert_eq!(removed.unwrap().category, "Food");
        assert!(store.budgets().is_empty());
        assert_eq!(store.transactions().len(), 1);
        assert!(store.remove_budget(&id).unwrap().is_none());
    }

    #[test]
    fn test_snapshots_reload_identically() {
        let mut store = FinanceStore::open(MemoryStore::new(), StoreOptions::new()).unwrap();
        store
            .add_transaction(NewTransaction::expense("Cinéma", 3500, "Sorties", date()))
            .unwrap();
        store.add_budget(NewBudget::new("Santé", 20000)).unwrap();

        let transactions = store.transactions().to_vec();
        let budgets = store.budgets().to_vec();
        let kv = store.kv().clone();

        let reopened = FinanceStore::open(kv, StoreOptions::new()).unwrap();
        assert_eq!(reopened.transactions(), transactions.as_slice());
        assert_eq!(reopened.budgets(), budgets.as_slice());
        assert_eq!(reopened.budget_for_category("Sorties").unwrap().current.amount(), 18500);
    }

    #[test]
    fn test_only_changed_collection_is_written() {
        let mut store = FinanceStore::open(MemoryStore::new(), StoreOptions::new()).unwrap();
        store
            .add_transaction(NewTransaction::expense("x", 10, "Uncategorized", date()))
            .unwrap();

        assert!(store.kv().get(TRANSACTIONS_KEY).unwrap().is_some());
        assert!(store.kv().get(BUDGETS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_snapshot_falls_back_to_seed() {
        let kv = MemoryStore::new()
            .with_entry(TRANSACTIONS_KEY, "not json")
            .with_entry(BUDGETS_KEY, "[]");

        let store = FinanceStore::open(kv, StoreOptions::new()).unwrap();

        assert_eq!(store.transactions().len(), 5);
        assert!(store.budgets().is_empty());
    }

    #[test]
    fn test_corrupt_snapshot_fails_when_asked() {
        let kv = MemoryStore::new().with_entry(BUDGETS_KEY, r#"[{"id": 1}]"#);
        let result = FinanceStore::open(kv, StoreOptions::new().snapshot_policy(SnapshotPolicy::Fail));

        match result {
            Err(FinanceError::Snapshot { key, .. }) => assert_eq!(key, BUDGETS_KEY),
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("corrupt snapshot was accepted"),
        }
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let options = StoreOptions::new().audit(AuditLogger::new(log_path.clone()));
        let mut store = FinanceStore::open(MemoryStore::new(), options).unwrap();

        let txn = store
            .add_transaction(NewTransaction::expense("Ticket", 500, "Transport", date()))
            .unwrap();
        store.remove_transaction(&txn.id).unwrap();

        let entries = AuditLogger::new(log_path).read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| (e.operation, e.entity_type)).collect();
        assert_eq!(
            ops,
            vec![
                (Operation::Create, EntityType::Transaction),
                (Operation::Update, EntityType::Budget),
                (Operation::Delete, EntityType::Transaction),
                (Operation::Update, EntityType::Budget),
            ]
        );
        assert_eq!(entries[1].diff_summary.as_deref(), Some("current: 12000 -> 12500"));
    }

    /// Memory store whose budgets key can't be written
    #[derive(Default)]
    struct ReadOnlyBudgets {
        inner: MemoryStore,
    }

    impl KeyValueStore for ReadOnlyBudgets {
        fn get(&self, key: &str) -> FinanceResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> FinanceResult<()> {
            if key == BUDGETS_KEY {
                return Err(FinanceError::Storage("disk full".into()));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_failed_budget_write_keeps_store_consistent() {
        let budget = NewBudget::new("Food", 1000).into_budget(BudgetId::from("b"));
        let mut store =
            FinanceStore::with_collections(ReadOnlyBudgets::default(), Vec::new(), vec![budget], None);

        let err = store
            .add_transaction(NewTransaction::expense("x", 300, "Food", date()))
            .unwrap_err();

        assert!(matches!(err, FinanceError::Storage(_)));
        assert!(store.transactions().is_empty());
        assert!(store.budget(&BudgetId::from("b")).unwrap().current.is_zero());
        assert_eq!(store.kv().inner.get(TRANSACTIONS_KEY).unwrap().as_deref(), Some("[]"));

        // Expenses outside any budget only touch the transactions snapshot
        store
            .add_transaction(NewTransaction::expense("y", 50, "Other", date()))
            .unwrap();
        assert_eq!(store.transactions().len(), 1);
    }

    #[test]
    fn test_audit_failure_does_not_fail_mutation() {
        let temp_dir = TempDir::new().unwrap();
        // A directory can't be opened for appending
        let options = StoreOptions::new().audit(AuditLogger::new(temp_dir.path().to_path_buf()));
        let mut store = FinanceStore::open(MemoryStore::new(), options).unwrap();

        let txn = store
            .add_transaction(NewTransaction::expense("Ticket", 500, "Transport", date()))
            .unwrap();

        assert_eq!(store.transactions()[0].id, txn.id);
        assert!(store.kv().get(TRANSACTIONS_KEY).unwrap().is_some());
        assert!(store.remove_transaction(&txn.id).unwrap().is_some());
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        let mut store = empty_store();

        let err = store
            .add_transaction(NewTransaction::expense("x", i64::MAX, "Food", date()))
            .unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)));
        assert!(store.transactions().is_empty());
        assert!(store.kv().is_empty());

        store
            .add_transaction(NewTransaction::expense("x", MAX_AMOUNT, "Food", date()))
            .unwrap();
        store.add_transaction(NewTransaction::expense("y", 1, "Food", date())).unwrap();
        assert_eq!(store.total_expenses().amount(), MAX_AMOUNT + 1);

        assert!(store.add_budget(NewBudget::new("Food", i64::MAX)).is_err());
        let (mut store, id) = store_with_food_budget();
        let err = store
            .update_budget(&id, BudgetUpdate::new().limit(MAX_AMOUNT + 1))
            .unwrap_err();
        assert!(matches!(err, FinanceError::Validation(_)));
        assert_eq!(store.budget(&id).unwrap().limit.amount(), 100000);
    }

    #[test]
    fn test_totals_saturate_on_loaded_data() {
        let huge = |id: &str| {
            NewTransaction::expense("x", i64::MAX, "Food", date()).into_transaction(TransactionId::from(id))
        };
        let store = FinanceStore::with_collections(MemoryStore::new(), vec![huge("1"), huge("2")], Vec::new(), None);

        assert_eq!(store.total_expenses(), Money::new(i64::MAX));
        assert_eq!(store.total_balance(), Money::new(i64::MIN));
        assert!(store.total_income().is_zero());
    }

    #[test]
    fn test_expenses_by_date_window() {
        let mut store = empty_store();
        for i in 0..12 {
            store
                .add_transaction(NewTransaction::expense("x", 100, "Food", date() - Duration::days(i * 20)))
                .unwrap();
        }

        let series = store.expenses_by_date();
        assert!(series.daily.len() <= 7);
        assert_eq!(series.monthly.len(), 6);
        assert!(series.monthly.windows(2).all(|w| w[0].key < w[1].key));
        assert_eq!(series.monthly.last().unwrap().key, "2025-01");
    }

    #[test]
    fn test_proverb_is_stable_for_a_day() {
        let store = empty_store();
        let day = NaiveDate::from_ymd_opt(2025, 6, 9).unwrap();

        assert_eq!(store.proverb_for(day), store.proverb_for(day));
        assert_eq!(store.proverb_for(day).text, store.proverbs()[9 % 8].text);
        assert_eq!(store.proverb_of_the_day(), store.proverb_of_the_day());
    }

    #[test]
    fn test_format_cfa() {
        let formatted = FinanceStore::<MemoryStore>::format_cfa(25000);
        assert!(formatted.starts_with("25"));
        assert!(formatted.ends_with("F\u{00A0}CFA"));
    }

    #[test]
    fn test_new_transaction_kind_is_kept() {
        let mut store = empty_store();
        let txn = store
            .add_transaction(NewTransaction::income("Prime", 10000, "Income", date()))
            .unwrap();
        assert_eq!(txn.kind, TransactionKind::Income);
        assert_eq!(store.transaction(&txn.id), Some(&txn));
    }
}
