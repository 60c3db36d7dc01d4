use crate::config::Config;
use crate::domain::exporter::literal::LiteralOptions;
use crate::domain::exporter::summary::ExportSummary;
use crate::domain::exporter::transform::transform_year_column;
use crate::error::ExportResult;
use crate::inbound::file::Reader;
use crate::outbound::file::SqlFileWriter;
use std::time::Instant;
use tracing::info;

/// load → split year column → write statements.
pub fn run(config: &Config) -> ExportResult<ExportSummary> {
    let start_time = Instant::now();
    info!(
        "Exporting '{}' into table '{}'",
        config.input_path.display(),
        config.table_name
    );
    let loaded = Reader::load_sheet(&config.input_path)?;
    let rows_read = loaded.table.len();
    let year_column_found = loaded.table.column_index(&config.year_column).is_some();
    let table = transform_year_column(loaded.table, &config.year_column);

    let writer = SqlFileWriter::new(&config.output_path, &config.table_name).with_options(
        LiteralOptions {
            trim_text: config.trim_text,
        },
    );
    let rows_written = writer.export(&table)?;

    Ok(ExportSummary {
        input_path: config.input_path.clone(),
        output_path: config.output_path.clone(),
        sheet_name: loaded.sheet_name,
        rows_read,
        rows_written,
        year_column_found,
        total_runtime_secs: start_time.elapsed().as_secs_f64(),
    })
}
