// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ShiftExport;
use crate::models::ShiftRecord;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `path` as `format`.
    ///
    /// An empty record list is an error: the caller asked for a file and
    /// there is nothing to put in it.
    pub fn export(
        records: &[ShiftRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if records.is_empty() {
            return Err(AppError::NoRecords);
        }

        ensure_writable(path, force)?;

        let rows: Vec<ShiftExport> = records.iter().map(ShiftExport::from).collect();
        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}
