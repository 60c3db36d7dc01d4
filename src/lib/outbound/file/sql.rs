use crate::domain::exporter::literal::{LiteralOptions, render_insert_with};
use crate::domain::models::Table;
use crate::error::{ExportError, ExportResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const PROGRESS_EVERY: usize = 10_000;

/// Writes one `INSERT` line per row to `writer`, returning how many were written.
pub fn write_statements<W: Write>(
    writer: &mut W,
    table: &Table,
    table_name: &str,
    options: LiteralOptions,
) -> std::io::Result<usize> {
    let mut written = 0;
    for record in table.records() {
        writer.write_all(render_insert_with(table_name, record, options).as_bytes())?;
        written += 1;
        if written % PROGRESS_EVERY == 0 {
            debug!("Wrote {}/{} statements", written, table.len());
        }
    }
    writer.flush()?;
    Ok(written)
}

#[derive(Debug, Clone)]
pub struct SqlFileWriter {
    output_path: PathBuf,
    table_name: String,
    options: LiteralOptions,
}

impl SqlFileWriter {
    pub fn new(output_path: impl Into<PathBuf>, table_name: impl Into<String>) -> Self {
        Self {
            output_path: output_path.into(),
            table_name: table_name.into(),
            options: LiteralOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LiteralOptions) -> Self {
        self.options = options;
        self
    }

    /// Truncates the output file and writes every row as UTF-8 SQL.
    ///
    /// The file is closed on every path. After a failed write its contents are
    /// whatever made it to disk.
    pub fn export(&self, table: &Table) -> ExportResult<usize> {
        let path_str = self.output_path.display().to_string();
        let file =
            File::create(&self.output_path).map_err(|e| ExportError::write(&path_str, e))?;
        let mut writer = BufWriter::new(file);
        let written = write_statements(&mut writer, table, &self.table_name, self.options)
            .map_err(|e| ExportError::write(&path_str, e))?;
        info!(
            "Wrote {} INSERT statements into table '{}' to {}",
            written, self.table_name, path_str
        );
        Ok(written)
    }
}

pub fn export(table: &Table, table_name: &str, output_path: &Path) -> ExportResult<usize> {
    SqlFileWriter::new(output_path, table_name).export(table)
}
