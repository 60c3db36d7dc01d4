pub mod sql;

pub use sql::{SqlFileWriter, export, write_statements};
