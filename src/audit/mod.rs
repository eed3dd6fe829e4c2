//! Audit logging
//!
//! Every create, update and delete the store performs on transactions and
//! budgets is appended to a JSONL log with before/after values. Budget
//! `current` adjustments caused by transaction changes show up as budget
//! updates.
//!
//! - `AuditEntry`: one logged operation.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: summarizes what changed between two states.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{Auditable, AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
