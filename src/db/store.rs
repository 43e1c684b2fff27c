//! SQLite implementation of `EntryStore`.

use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_entries_for_user, delete_entry, insert_entry, load_entries_for_user,
};
use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use crate::store::EntryStore;
use chrono::{DateTime, FixedOffset};
use tracing::debug;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open (and migrate, if needed) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        debug!(path, "sqlite store opened");
        Ok(Self { pool })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl EntryStore for SqliteStore {
    fn list(&self, user_id: &str) -> AppResult<Vec<LogEntry>> {
        load_entries_for_user(&self.pool.conn, user_id)
    }

    fn insert(
        &mut self,
        user_id: &str,
        kind: EntryType,
        timestamp: DateTime<FixedOffset>,
    ) -> AppResult<LogEntry> {
        let id = insert_entry(&self.pool.conn, user_id, kind, &timestamp)?;
        let entry = LogEntry::new(id, user_id, kind, timestamp);

        audit(
            &self.pool.conn,
            "add",
            &format!("#{}", id),
            &format!("{} at {} for {}", kind, entry.timestamp, user_id),
        )?;

        Ok(entry)
    }

    fn delete_by_id(&mut self, user_id: &str, id: i64) -> AppResult<()> {
        let removed = delete_entry(&self.pool.conn, user_id, id)?;
        if removed == 0 {
            return Err(AppError::EntryNotFound(id));
        }

        audit(
            &self.pool.conn,
            "del",
            &format!("#{}", id),
            &format!("Deleted entry for {}", user_id),
        )?;

        Ok(())
    }

    fn delete_all(&mut self, user_id: &str) -> AppResult<usize> {
        // Rows and audit line commit together; dropping `tx` on error rolls back.
        let tx = self.pool.conn.transaction()?;
        let removed = delete_entries_for_user(&tx, user_id)?;
        audit(
            &tx,
            "clear",
            user_id,
            &format!("Deleted {} entries", removed),
        )?;
        tx.commit()?;

        debug!(removed, user = user_id, "sqlite store: cleared user");
        Ok(removed)
    }
}
