//! Whole-collection JSON snapshots
//!
//! Each collection is stored as a single JSON array under a fixed key and
//! overwritten in full after every mutation.

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::FinanceResult;

use super::kv::KeyValueStore;

/// Key holding the transaction collection
pub const TRANSACTIONS_KEY: &str = "finance-transactions";

/// Key holding the budget collection
pub const BUDGETS_KEY: &str = "finance-budgets";

/// Outcome of reading a snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot<T> {
    /// Stored and decoded
    Stored(Vec<T>),
    /// Nothing stored under the key yet
    Missing,
    /// Something is stored but it isn't a valid array of records
    Corrupt(String),
}

/// Read and decode the collection stored under `key`
///
/// Backend failures are errors; undecodable contents are reported as
/// [`Snapshot::Corrupt`] so the caller can apply its own policy.
pub fn load<T, K>(kv: &K, key: &str) -> FinanceResult<Snapshot<T>>
where
    T: DeserializeOwned,
    K: KeyValueStore + ?Sized,
{
    let Some(raw) = kv.get(key)? else {
        return Ok(Snapshot::Missing);
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => {
            debug!(key, count = items.len(), "loaded snapshot");
            Ok(Snapshot::Stored(items))
        }
        Err(e) => Ok(Snapshot::Corrupt(e.to_string())),
    }
}

/// Encode `items` and overwrite the value under `key`
pub fn save<T, K>(kv: &mut K, key: &str, items: &[T]) -> FinanceResult<()>
where
    T: Serialize,
    K: KeyValueStore + ?Sized,
{
    let encoded = serde_json::to_string(items)?;
    kv.set(key, &encoded)?;
    debug!(key, count = items.len(), bytes = encoded.len(), "wrote snapshot");
    Ok(())
}
