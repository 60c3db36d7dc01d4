use crate::error::{ExportError, ExportResult};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub table_name: String,
    pub year_column: String,
    pub trim_text: bool,
    pub log_level: tracing::Level,
}

const INPUT_PATH_KEY: &str = "INPUT_PATH";
const OUTPUT_PATH_KEY: &str = "OUTPUT_PATH";
const TABLE_NAME_KEY: &str = "TABLE_NAME";
const YEAR_COLUMN_KEY: &str = "YEAR_COLUMN";
const TRIM_TEXT_KEY: &str = "TRIM_TEXT";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

const DEFAULT_INPUT_PATH: &str = "cars.xlsx";
const DEFAULT_OUTPUT_PATH: &str = "output.sql";
const DEFAULT_TABLE_NAME: &str = "companies";
pub const DEFAULT_YEAR_COLUMN: &str = "سنة الصنع";

impl Config {
    pub fn from_env() -> ExportResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for unset keys.
    pub fn from_vars<F>(lookup: F) -> ExportResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_path = PathBuf::from(
            lookup(INPUT_PATH_KEY).unwrap_or_else(|| DEFAULT_INPUT_PATH.to_string()),
        );
        let output_path = PathBuf::from(
            lookup(OUTPUT_PATH_KEY).unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string()),
        );
        let table_name = lookup(TABLE_NAME_KEY).unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        if table_name.trim().is_empty() {
            return Err(ExportError::Config(format!("{} must not be empty", TABLE_NAME_KEY)));
        }
        let year_column =
            lookup(YEAR_COLUMN_KEY).unwrap_or_else(|| DEFAULT_YEAR_COLUMN.to_string());
        let trim_text = match lookup(TRIM_TEXT_KEY) {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ExportError::Config(format!(
                    "{} must be true or false, got '{}'",
                    TRIM_TEXT_KEY, raw
                ))
            })?,
            None => false,
        };
        let log_level = match lookup(LOG_LEVEL_KEY) {
            Some(raw) => tracing::Level::from_str(raw.trim()).map_err(|_| {
                ExportError::Config(format!("{} is not a valid level: '{}'", LOG_LEVEL_KEY, raw))
            })?,
            None => tracing::Level::INFO,
        };

        Ok(Self {
            input_path,
            output_path,
            table_name,
            year_column,
            trim_text,
            log_level,
        })
    }

    /// Positional `[input] [output] [table]` arguments override the loaded values.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut positional = args.into_iter().filter(|arg| !arg.starts_with("--"));
        if let Some(input) = positional.next() {
            self.input_path = PathBuf::from(input);
        }
        if let Some(output) = positional.next() {
            self.output_path = PathBuf::from(output);
        }
        if let Some(table) = positional.next() {
            self.table_name = table;
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_vars(|_| None).unwrap();
        assert_eq!(config.input_path, PathBuf::from("cars.xlsx"));
        assert_eq!(config.output_path, PathBuf::from("output.sql"));
        assert_eq!(config.table_name, "companies");
        assert_eq!(config.year_column, DEFAULT_YEAR_COLUMN);
        assert!(!config.trim_text);
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_vars(lookup_from(&[
            ("INPUT_PATH", "in/data.xlsx"),
            ("OUTPUT_PATH", "out/cars.sql"),
            ("TABLE_NAME", "cars"),
            ("YEAR_COLUMN", "year"),
            ("TRIM_TEXT", "yes"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.input_path, PathBuf::from("in/data.xlsx"));
        assert_eq!(config.output_path, PathBuf::from("out/cars.sql"));
        assert_eq!(config.table_name, "cars");
        assert_eq!(config.year_column, "year");
        assert!(config.trim_text);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            Config::from_vars(lookup_from(&[("TRIM_TEXT", "maybe")])),
            Err(ExportError::Config(_))
        ));
        assert!(matches!(
            Config::from_vars(lookup_from(&[("LOG_LEVEL", "loud")])),
            Err(ExportError::Config(_))
        ));
        assert!(matches!(
            Config::from_vars(lookup_from(&[("TABLE_NAME", "  ")])),
            Err(ExportError::Config(_))
        ));
    }

    #[test]
    fn positional_args_override() {
        let config = Config::from_vars(|_| None).unwrap().with_args(vec![
            "a.xlsx".to_string(),
            "--verbose".to_string(),
            "b.sql".to_string(),
        ]);
        assert_eq!(config.input_path, PathBuf::from("a.xlsx"));
        assert_eq!(config.output_path, PathBuf::from("b.sql"));
        assert_eq!(config.table_name, "companies");
    }
}
