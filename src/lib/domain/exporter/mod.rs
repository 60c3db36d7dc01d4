pub mod literal;
pub mod processor;
pub mod setup;
pub mod summary;
pub mod transform;

pub use literal::{
    LiteralOptions, format_value, format_value_with, render_insert, render_insert_with,
};
pub use processor::run;
pub use setup::setup_logging;
pub use summary::{ExportSummary, log_summary};
pub use transform::{MANUFACTURE_END, MANUFACTURE_START, transform_year_column};
