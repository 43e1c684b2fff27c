//! Entry storage behind a narrow repository interface.
//!
//! Handlers and the aggregator only ever see `EntryStore`; the concrete
//! backend (SQLite in `db::store`, or the in-process `MemoryStore`) is picked
//! by `cli::context::AppContext`.

mod memory;

pub use memory::MemoryStore;

use crate::errors::AppResult;
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use chrono::{DateTime, FixedOffset};

pub trait EntryStore {
    /// All entries owned by `user_id`, newest first.
    fn list(&self, user_id: &str) -> AppResult<Vec<LogEntry>>;

    /// Append a new entry and return it with its store-assigned id.
    fn insert(
        &mut self,
        user_id: &str,
        kind: EntryType,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<LogEntry>;

    /// Remove entry `id` if it belongs to `user_id`.
    /// Returns `AppError::EntryNotFound` otherwise.
    fn delete_by_id(&mut self, user_id: &str, id: i64) -> AppResult<()>;

    /// Remove every entry of `user_id` at once; either all of them go or
    /// none do. Returns the number removed.
    fn delete_all(&mut self, user_id: &str) -> AppResult<usize>;
}

/// Newest first; equal instants keep the most recently created entry on top.
pub(crate) fn sort_newest_first(entries: &mut [LogEntry]) {
    entries.sort_by(|a, b| {
        let ta = a.parsed_timestamp().ok();
        let tb = b.parsed_timestamp().ok();
        tb.cmp(&ta).then(b.id.cmp(&a.id))
    });
}
