use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use crate::store::EntryStore;
use crate::utils::time::parse_optional_timestamp;
use chrono::{DateTime, FixedOffset};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Record one entry. `at` is free-form user input (RFC 3339 or a local
    /// `YYYY-MM-DD HH:MM`); when absent the entry is stamped with `now`.
    pub fn apply(
        store: &mut dyn EntryStore,
        user_id: &str,
        kind: &str,
        at: Option<&String>,
        now: DateTime<FixedOffset>,
    ) -> AppResult<LogEntry> {
        let kind =
            EntryType::et_from_str(kind).ok_or_else(|| AppError::InvalidEntryType(kind.into()))?;
        let timestamp = parse_optional_timestamp(at, now)?;

        store.insert(user_id, kind, timestamp)
    }
}
