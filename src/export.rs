use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::{info, instrument};

use crate::error::Result;
use crate::io::excel_write;
use crate::model::OutputRow;

/// File name for a report started at `timestamp`. Second resolution keeps
/// repeated runs from clobbering earlier reports.
pub fn report_file_name(timestamp: &NaiveDateTime) -> String {
    format!("MerakiBSSIDs_{}.xlsx", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Writes `rows` into a freshly named workbook under `output_dir` and returns
/// the artifact's absolute path.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir.display()))]
pub fn export_report(rows: &[OutputRow], output_dir: &Path) -> Result<PathBuf> {
    let file_name = report_file_name(&chrono::Local::now().naive_local());
    let path = std::path::absolute(output_dir.join(file_name))?;
    excel_write::write_report(&path, rows)?;
    info!(row_count = rows.len(), path = %path.display(), "report written");
    Ok(path)
}
