//! Storage layer
//!
//! Key-value persistence adapters plus the JSON snapshot encoding the store
//! uses on top of them.

pub mod file_io;
pub mod kv;
pub mod snapshot;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::{Snapshot, BUDGETS_KEY, TRANSACTIONS_KEY};

use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;

/// Open the file-backed store under the configured data directory
pub fn open_file_store(paths: &FinancePaths) -> FinanceResult<FileStore> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}
