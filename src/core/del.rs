use crate::errors::AppResult;
use crate::store::EntryStore;
use tracing::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry of `user_id`. Fails with `EntryNotFound` when the id
    /// does not exist or belongs to someone else.
    pub fn apply(store: &mut dyn EntryStore, user_id: &str, id: i64) -> AppResult<()> {
        store.delete_by_id(user_id, id)?;
        info!(id, user = user_id, "entry deleted");
        Ok(())
    }

    /// Delete every entry of `user_id` in one store operation; returns how
    /// many were removed.
    pub fn clear(store: &mut dyn EntryStore, user_id: &str) -> AppResult<usize> {
        let removed = store.delete_all(user_id)?;
        info!(count = removed, user = user_id, "entries cleared");
        Ok(removed)
    }
}
