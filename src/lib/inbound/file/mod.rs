pub mod csv;
pub mod excel;

pub use self::csv::Csv;
pub use self::excel::Excel;

use crate::domain::models::{CellValue, Table};
use crate::error::{ExportError, ExportResult};
use std::collections::{HashMap, HashSet};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

pub struct Reader;

/// A loaded table together with the sheet it came from, when there is one.
#[derive(Debug, Clone)]
pub struct LoadedSheet {
    pub table: Table,
    pub sheet_name: Option<String>,
}

impl Reader {
    pub fn load(path: &Path) -> ExportResult<Table> {
        Self::load_sheet(path).map(|sheet| sheet.table)
    }

    /// Picks the reader from the file extension. Anything that is not a
    /// workbook extension or `.csv` is refused.
    pub fn load_sheet(path: &Path) -> ExportResult<LoadedSheet> {
        if !path.is_file() {
            return Err(ExportError::read(
                path.display().to_string(),
                "file does not exist",
            ));
        }
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .unwrap_or_default();
        let loaded = match ext.as_str() {
            "csv" => <Reader as Csv>::csv_to_table(path)?,
            e if WORKBOOK_EXTENSIONS.contains(&e) => {
                <Reader as Excel>::excel_to_table(path)?
            }
            _ => {
                return Err(ExportError::read(
                    path.display().to_string(),
                    format!("unsupported extension '{}'", ext),
                ));
            }
        };
        info!(
            "Loaded {} rows x {} columns from '{}'{}",
            loaded.table.len(),
            loaded.table.columns().len(),
            path.display(),
            loaded
                .sheet_name
                .as_deref()
                .map(|s| format!(", sheet '{}'", s))
                .unwrap_or_default()
        );
        Ok(loaded)
    }
}

/// Names blank headers `Unnamed: <index>` and suffixes repeats with `.1`, `.2`, ...
pub(crate) fn unique_headers<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut repeats: HashMap<String, usize> = HashMap::new();
    let mut output = Vec::new();
    for (idx, header) in raw.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            header
        };
        let mut name = base.clone();
        while seen.contains(&name) {
            let n = repeats.entry(base.clone()).or_insert(0);
            *n += 1;
            name = format!("{}.{}", base, n);
        }
        seen.insert(name.clone());
        output.push(name);
    }
    output
}

/// Builds a table from typed rows. Blank rows are kept.
pub(crate) fn build_table<R>(headers: Vec<String>, rows: R) -> Table
where
    R: IntoIterator<Item = Vec<CellValue>>,
{
    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row);
    }
    table
}
