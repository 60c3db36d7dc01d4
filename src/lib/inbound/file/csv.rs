use crate::domain::models::CellValue;
use crate::error::{ExportError, ExportResult};
use crate::inbound::file::{LoadedSheet, Reader, build_table, unique_headers};
use csv::ReaderBuilder;
use std::path::Path;

pub trait Csv {
    /// Reads a CSV file whose first record is the header.
    fn csv_to_table(path: &Path) -> ExportResult<LoadedSheet>;
}

/// Integers first, then floats, otherwise the raw text. Empty fields are null.
pub(crate) fn cell_from_field(field: &str) -> CellValue {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return CellValue::Int(i);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_nan() => CellValue::Null,
        Ok(f) => CellValue::Float(f),
        Err(_) => CellValue::Text(field.to_string()),
    }
}

impl Csv for Reader {
    fn csv_to_table(path: &Path) -> ExportResult<LoadedSheet> {
        let file_name = path.display().to_string();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| ExportError::read(&file_name, e))?;
        let headers = unique_headers(
            rdr.headers()
                .map_err(|e| ExportError::read(&file_name, e))?
                .iter()
                .map(String::from),
        );
        let width = headers.len();
        let mut rows: Vec<Vec<CellValue>> = Vec::new();
        for (row_num, record) in rdr.records().enumerate() {
            let record = record.map_err(|e| {
                ExportError::read(&file_name, format!("row {}: {}", row_num + 1, e))
            })?;
            rows.push(record.iter().take(width).map(cell_from_field).collect());
        }
        Ok(LoadedSheet {
            table: build_table(headers, rows),
            sheet_name: None,
        })
    }
}
