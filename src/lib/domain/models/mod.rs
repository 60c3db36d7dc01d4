pub mod cell;
pub mod table;
pub mod year_range;

pub use cell::CellValue;
pub use table::{Record, Table};
pub use year_range::YearRange;
