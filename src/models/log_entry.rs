use super::entry_type::EntryType;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64, // ⇔ entries.id (assigned by the store)
    #[serde(default)]
    pub user_id: String, // ⇔ entries.user_id
    #[serde(rename = "type")]
    pub kind: EntryType, // ⇔ entries.kind ('urination' | 'defecation')
    pub timestamp: String, // ⇔ entries.timestamp (TEXT, RFC 3339)
}

impl LogEntry {
    pub fn new(id: i64, user_id: &str, kind: EntryType, timestamp: DateTime<FixedOffset>) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            kind,
            timestamp: timestamp.to_rfc3339(),
        }
    }

    /// Parse the stored timestamp. Entries coming from the store are always
    /// valid; entries read from foreign JSON may not be.
    pub fn parsed_timestamp(&self) -> AppResult<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map_err(|_| AppError::InvalidTimestamp(self.timestamp.clone()))
    }

    pub fn display_timestamp(&self) -> String {
        match self.parsed_timestamp() {
            Ok(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
            Err(_) => self.timestamp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_type_field() {
        let ts = DateTime::parse_from_rfc3339("2025-06-01T08:30:00+09:00").unwrap();
        let entry = LogEntry::new(7, "alice", EntryType::Urination, ts);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["type"], "urination");
        assert_eq!(json["timestamp"], "2025-06-01T08:30:00+09:00");
    }

    #[test]
    fn user_id_is_optional_on_input() {
        let entry: LogEntry = serde_json::from_str(
            r#"{"id": 3, "type": "defecation", "timestamp": "2025-06-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(entry.user_id, "");
        assert_eq!(entry.kind, EntryType::Defecation);
    }

    #[test]
    fn malformed_timestamp_is_reported() {
        let entry = LogEntry {
            id: 1,
            user_id: "u".into(),
            kind: EntryType::Urination,
            timestamp: "yesterday".into(),
        };
        assert!(matches!(
            entry.parsed_timestamp(),
            Err(AppError::InvalidTimestamp(_))
        ));
        assert_eq!(entry.display_timestamp(), "yesterday");
    }
}
