// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::ShiftExport;

use crate::errors::AppResult;
use crate::models::ShiftRecord;
use crate::ui::messages::success;
use crate::utils::table::Table;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Common helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// File formats accepted by `export`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// How `parse` prints records on stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Render records for stdout in the requested format.
pub fn render(records: &[ShiftRecord], format: OutputFormat) -> AppResult<String> {
    let rows: Vec<ShiftExport> = records.iter().map(ShiftExport::from).collect();
    match format {
        OutputFormat::Table => Ok(render_table(&rows)),
        OutputFormat::Json => json_csv::to_json_string(&rows),
        OutputFormat::Csv => json_csv::to_csv_string(&rows),
    }
}

fn render_table(rows: &[ShiftExport]) -> String {
    let mut table = Table::new(&model::get_headers());
    for row in rows {
        table.add_row(model::export_to_row(row));
    }
    table.render()
}
