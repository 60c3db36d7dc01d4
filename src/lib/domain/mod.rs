pub mod exporter;
pub mod models;
