#![allow(deprecated)] // Command::cargo_bin

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn exporter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("xlsx_sql_exporter").unwrap();
    cmd.current_dir(dir.path())
        .env("TABLE_NAME", "cars")
        .env("LOG_LEVEL", "info")
        .env("TRIM_TEXT", "false")
        .env_remove("YEAR_COLUMN")
        .env_remove("INPUT_PATH")
        .env_remove("OUTPUT_PATH");
    cmd
}

fn write_cars(dir: &TempDir) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "name").unwrap();
    sheet.write_string(0, 1, "سنة الصنع").unwrap();
    sheet.write_string(1, 0, "Ali's Car").unwrap();
    sheet.write_string(1, 1, "2010-2015").unwrap();
    sheet.write_string(2, 0, "Accent").unwrap();
    workbook.save(dir.path().join("cars.xlsx")).unwrap();
}

#[test]
fn exports_with_positional_args() {
    let dir = TempDir::new().unwrap();
    write_cars(&dir);

    let assert = exporter(&dir)
        .args(["cars.xlsx", "cars.sql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL file generated successfully"))
        .stdout(predicate::str::contains("cars.sql"))
        .stderr(predicate::str::contains("Export Summary"));
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let sql = std::fs::read_to_string(dir.path().join("cars.sql")).unwrap();
    assert_eq!(
        sql,
        "INSERT INTO cars (\"name\", \"manufacture_start\", \"manufacture_end\") VALUES ('Ali''s Car', '2010', '2015');\n\
         INSERT INTO cars (\"name\", \"manufacture_start\", \"manufacture_end\") VALUES ('Accent', NULL, NULL);\n"
    );
}

#[test]
fn reads_paths_from_environment() {
    let dir = TempDir::new().unwrap();
    write_cars(&dir);

    exporter(&dir)
        .env("INPUT_PATH", "cars.xlsx")
        .env("OUTPUT_PATH", "from_env.sql")
        .assert()
        .success();

    let sql = std::fs::read_to_string(dir.path().join("from_env.sql")).unwrap();
    assert_eq!(sql.lines().count(), 2);
}

#[test]
fn missing_input_fails() {
    let dir = TempDir::new().unwrap();

    exporter(&dir)
        .args(["missing.xlsx", "out.sql"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to export"));

    assert!(!dir.path().join("out.sql").exists());
}

#[test]
fn invalid_log_level_fails() {
    let dir = TempDir::new().unwrap();

    exporter(&dir)
        .env("LOG_LEVEL", "chatty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("LOG_LEVEL"));
}
