use crate::domain::models::{Table, YearRange};
use tracing::{debug, info};

pub const MANUFACTURE_START: &str = "manufacture_start";
pub const MANUFACTURE_END: &str = "manufacture_end";

/// Replaces `source_column` with `manufacture_start` / `manufacture_end`
/// appended at the end. A table without that column comes back untouched.
pub fn transform_year_column(mut table: Table, source_column: &str) -> Table {
    let Some(index) = table.column_index(source_column) else {
        debug!(
            "Column '{}' not present, leaving table unchanged",
            source_column
        );
        return table;
    };
    let source_values = table.take_column(index);
    let mut starts = Vec::with_capacity(source_values.len());
    let mut ends = Vec::with_capacity(source_values.len());
    let mut unparsed = 0;
    for value in &source_values {
        let range = YearRange::split(value);
        if range.is_empty() && !value.is_blank() {
            unparsed += 1;
        }
        let (start, end) = range.into_cells();
        starts.push(start);
        ends.push(end);
    }
    table.push_column(MANUFACTURE_START, starts);
    table.push_column(MANUFACTURE_END, ends);
    info!(
        "Split column '{}' into {} / {} for {} rows ({} without a year)",
        source_column,
        MANUFACTURE_START,
        MANUFACTURE_END,
        source_values.len(),
        unparsed
    );
    table
}
