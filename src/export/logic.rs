// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::store::EntryStore;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every entry of `user_id`, newest first.
    /// Returns the number of exported entries.
    pub fn export(
        store: &dyn EntryStore,
        user_id: &str,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let entries = store.list(user_id)?;
        if entries.is_empty() {
            warning("No entries found. Nothing to export.");
            return Ok(0);
        }

        debug!(count = entries.len(), format = format.as_str(), "exporting entries");

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
        }

        Ok(entries.len())
    }
}
