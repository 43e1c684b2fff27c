use crate::errors::{AppError, AppResult};
use crate::models::entry_type::EntryType;
use crate::models::log_entry::LogEntry;
use chrono::{DateTime, FixedOffset, Local};
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

pub fn map_row(row: &Row) -> Result<LogEntry> {
    let kind_str: String = row.get("kind")?;
    let kind = EntryType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEntryType(kind_str.clone())),
        )
    })?;

    Ok(LogEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        kind,
        timestamp: row.get("timestamp")?,
    })
}

pub fn load_entries_for_user(conn: &Connection, user_id: &str) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, user_id, kind, timestamp FROM entries
         WHERE user_id = ?1
         ORDER BY ts_millis DESC, id DESC",
    )?;

    let rows = stmt.query_map([user_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new entry and return its row id.
pub fn insert_entry(
    conn: &Connection,
    user_id: &str,
    kind: EntryType,
    timestamp: &DateTime<FixedOffset>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (user_id, kind, timestamp, ts_millis, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            kind.to_db_str(),
            timestamp.to_rfc3339(),
            timestamp.timestamp_millis(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete one entry owned by `user_id`; returns the number of removed rows.
pub fn delete_entry(conn: &Connection, user_id: &str, id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM entries WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    Ok(n)
}

/// Delete every entry owned by `user_id`; returns the number of removed rows.
pub fn delete_entries_for_user(conn: &Connection, user_id: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM entries WHERE user_id = ?1", params![user_id])?;
    Ok(n)
}

/// Audit log rows, oldest first: (id, date, operation, target, message).
pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt =
        conn.prepare("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}
