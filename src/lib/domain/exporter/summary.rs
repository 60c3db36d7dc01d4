use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub sheet_name: Option<String>,
    pub rows_read: usize,
    pub rows_written: usize,
    pub year_column_found: bool,
    pub total_runtime_secs: f64,
}

pub fn log_summary(summary: &ExportSummary) {
    info!("=== Export Summary ===");
    info!("Input file: {}", summary.input_path.display());
    if let Some(sheet) = &summary.sheet_name {
        info!("Sheet: {}", sheet);
    }
    info!("Rows read: {}", summary.rows_read);
    info!("Statements written: {}", summary.rows_written);
    info!("Output file: {}", summary.output_path.display());
    info!("Total runtime: {:.2}s", summary.total_runtime_secs);
    if !summary.year_column_found {
        warn!("Year column was not found; no manufacture_start/manufacture_end columns added");
    }
}
