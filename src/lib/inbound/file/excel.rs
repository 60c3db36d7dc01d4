use crate::domain::models::CellValue;
use crate::error::{ExportError, ExportResult};
use crate::inbound::file::{LoadedSheet, Reader, build_table, unique_headers};
use calamine::{Data, Reader as CalamineReader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;
use tracing::debug;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let days = serial.floor() as i64;
    let seconds_in_day = (serial.fract() * 86400.0).round() as u32;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds_in_day.min(86399), 0)?;
    let date = excel_epoch.checked_add_signed(chrono::Duration::try_days(days)?)?;
    Some(NaiveDateTime::new(date, time))
}

pub trait Excel {
    /// Reads the first worksheet; its first row becomes the header.
    fn excel_to_table(path: &Path) -> ExportResult<LoadedSheet>;
}

pub(crate) fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) if f.is_nan() => CellValue::Null,
        Data::Float(f) => CellValue::Float(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Int(i64::from(*b)),
        Data::DateTime(dt) => match excel_serial_to_datetime(dt.as_f64()) {
            Some(ndt) => CellValue::Text(ndt.format(DATETIME_FORMAT).to_string()),
            None => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => {
            debug!("Cell error {:?} read as NULL", e);
            CellValue::Null
        }
    }
}

impl Excel for Reader {
    fn excel_to_table(path: &Path) -> ExportResult<LoadedSheet> {
        let file_name = path.display().to_string();
        let mut workbook = open_workbook_auto(path).map_err(|e| {
            ExportError::read(&file_name, format!("not a readable spreadsheet: {}", e))
        })?;
        let first_sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ExportError::read(&file_name, "workbook has no worksheets"))?;
        let range = workbook.worksheet_range(&first_sheet_name).map_err(|e| {
            ExportError::read(
                &file_name,
                format!("failed to read worksheet '{}': {}", first_sheet_name, e),
            )
        })?;
        // the range begins at the first used column; pad back to column A
        let leading = range.start().map_or(0, |(_, col)| col as usize);
        let mut rows_iter = range.rows();
        let table = match rows_iter.next() {
            Some(header_row) => {
                let headers = unique_headers(
                    std::iter::repeat_n(String::new(), leading)
                        .chain(header_row.iter().map(|cell| cell.to_string())),
                );
                let width = headers.len();
                build_table(
                    headers,
                    rows_iter.map(|row| {
                        std::iter::repeat_n(CellValue::Null, leading)
                            .chain(row.iter().map(cell_from_data))
                            .take(width)
                            .collect::<Vec<_>>()
                    }),
                )
            }
            None => {
                debug!("Worksheet '{}' is empty", first_sheet_name);
                Default::default()
            }
        };
        Ok(LoadedSheet {
            table,
            sheet_name: Some(first_sheet_name),
        })
    }
}
