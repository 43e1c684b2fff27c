use super::{EntryStore, sort_newest_first};
use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use chrono::{DateTime, FixedOffset};
use tracing::debug;

/// Process-local store. Ids grow monotonically and are never reused.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Vec<LogEntry>,
    next_id: i64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryStore for MemoryStore {
    fn list(&self, user_id: &str) -> AppResult<Vec<LogEntry>> {
        let mut out: Vec<LogEntry> = self
            .entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        sort_newest_first(&mut out);
        Ok(out)
    }

    fn insert(
        &mut self,
        user_id: &str,
        kind: EntryType,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<LogEntry> {
        let entry = LogEntry::new(self.next_id, user_id, kind, timestamp);
        self.next_id += 1;
        self.entries.push(entry.clone());
        debug!(id = entry.id, user = user_id, "memory store: inserted entry");
        Ok(entry)
    }

    fn delete_by_id(&mut self, user_id: &str, id: i64) -> AppResult<()> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id && e.user_id == user_id)
            .ok_or(AppError::EntryNotFound(id))?;
        self.entries.remove(idx);
        debug!(id, user = user_id, "memory store: deleted entry");
        Ok(())
    }

    fn delete_all(&mut self, user_id: &str) -> AppResult<usize> {
        let before = self.entries.len();
        self.entries.retain(|e| e.user_id != user_id);
        Ok(before - self.entries.len())
    }
}
