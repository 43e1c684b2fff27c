// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::log_entry::LogEntry;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed, in the same shape `read_json` accepts.
pub(crate) fn export_json(entries: &[LogEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(entries)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", entries.len(), path);
    Ok(())
}

/// Export CSV (header included thanks to serde).
pub(crate) fn export_csv(entries: &[LogEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for item in entries {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", entries.len(), path);
    Ok(())
}

/// Load a JSON array of entries (as produced by `export --format json`).
/// Timestamps are not validated here; the aggregator skips bad ones.
pub fn read_json(path: &Path) -> AppResult<Vec<LogEntry>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<LogEntry> = serde_json::from_str(&content)?;
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry_type::EntryType;
    use chrono::DateTime;

    fn sample() -> Vec<LogEntry> {
        vec![
            LogEntry::new(
                2,
                "alice",
                EntryType::Defecation,
                DateTime::parse_from_rfc3339("2025-06-02T07:15:00+09:00").unwrap(),
            ),
            LogEntry::new(
                1,
                "alice",
                EntryType::Urination,
                DateTime::parse_from_rfc3339("2025-06-01T22:40:00+09:00").unwrap(),
            ),
        ]
    }

    #[test]
    fn json_export_can_be_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");

        export_json(&sample(), &path).unwrap();
        assert_eq!(read_json(&path).unwrap(), sample());
    }

    #[test]
    fn csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.csv");

        export_csv(&sample(), &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "id,user_id,type,timestamp");
        assert_eq!(lines[1], "2,alice,defecation,2025-06-02T07:15:00+09:00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn unknown_type_in_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"[{"id": 1, "type": "sleep", "timestamp": "2025-06-01T00:00:00Z"}]"#,
        )
        .unwrap();

        assert!(read_json(&path).is_err());
    }
}
