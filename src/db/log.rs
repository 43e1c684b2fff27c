use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;
use tracing::debug;

/// Append one audit row (`init`, `add`, `del`, `migration_applied`) to the
/// `log` table. `target` may be empty.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;

    debug!(operation, target, "audit row written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::load_log;

    #[test]
    fn rows_come_back_in_order() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();

        audit(&conn, "init", "", "Database initialized").unwrap();
        audit(&conn, "del", "#3", "Deleted entry for alice").unwrap();

        let rows: Vec<(String, String)> = load_log(&conn)
            .unwrap()
            .into_iter()
            .filter(|(_, _, op, ..)| op != "migration_applied")
            .map(|(_, _, op, target, _)| (op, target))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("init".to_string(), String::new()),
                ("del".to_string(), "#3".to_string())
            ]
        );
    }
}
