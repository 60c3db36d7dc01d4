use crate::domain::models::CellValue;
use regex::Regex;
use std::sync::LazyLock;

static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}").expect("year pattern is a valid regex"));

/// Start and end year pulled out of a free-text range such as `2010-2015`.
///
/// Either both ends are known or neither is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearRange(Option<(String, String)>);

impl YearRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self(Some((start.into(), end.into())))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    pub fn start(&self) -> Option<&str> {
        self.0.as_ref().map(|(start, _)| start.as_str())
    }

    pub fn end(&self) -> Option<&str> {
        self.0.as_ref().map(|(_, end)| end.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Scans the cell's text for 4-digit runs, left to right.
    ///
    /// One run gives `(y, y)`, two or more give `(first, second)`, none gives an
    /// empty range. Runs longer than four digits contribute their leading four.
    pub fn split(cell: &CellValue) -> Self {
        if cell.is_blank() {
            return Self::empty();
        }
        let text = cell.to_string();
        let mut years = YEAR_PATTERN.find_iter(&text).map(|m| m.as_str());
        match (years.next(), years.next()) {
            (Some(start), Some(end)) => Self::new(start, end),
            (Some(only), None) => Self::new(only, only),
            _ => Self::empty(),
        }
    }

    pub fn into_cells(self) -> (CellValue, CellValue) {
        match self.0 {
            Some((start, end)) => (CellValue::Text(start), CellValue::Text(end)),
            None => (CellValue::Null, CellValue::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_empty_give_nothing() {
        assert_eq!(YearRange::split(&CellValue::Null), YearRange::empty());
        assert_eq!(YearRange::split(&CellValue::text("")), YearRange::empty());
        assert_eq!(
            YearRange::split(&CellValue::text("قديم")),
            YearRange::empty()
        );
    }

    #[test]
    fn single_year_fills_both_ends() {
        let range = YearRange::split(&CellValue::text("2015"));
        assert_eq!(range.start(), Some("2015"));
        assert_eq!(range.end(), Some("2015"));
    }

    #[test]
    fn dash_range() {
        assert_eq!(
            YearRange::split(&CellValue::text("2010-2015")),
            YearRange::new("2010", "2015")
        );
    }

    #[test]
    fn arabic_text_keeps_first_two() {
        assert_eq!(
            YearRange::split(&CellValue::text("من 2010 إلى 2015 وأكثر 2099")),
            YearRange::new("2010", "2015")
        );
    }

    #[test]
    fn numeric_cells_are_scanned_as_text() {
        assert_eq!(
            YearRange::split(&CellValue::Int(2018)),
            YearRange::new("2018", "2018")
        );
        assert_eq!(
            YearRange::split(&CellValue::Float(2010.5)),
            YearRange::new("2010", "2010")
        );
        assert_eq!(YearRange::split(&CellValue::Int(99)), YearRange::empty());
    }

    #[test]
    fn long_digit_runs_split_into_fours() {
        assert_eq!(
            YearRange::split(&CellValue::text("20102015")),
            YearRange::new("2010", "2015")
        );
        assert_eq!(
            YearRange::split(&CellValue::text("12345")),
            YearRange::new("1234", "1234")
        );
    }

    #[test]
    fn into_cells_keeps_nulls_paired() {
        assert_eq!(
            YearRange::empty().into_cells(),
            (CellValue::Null, CellValue::Null)
        );
        assert_eq!(
            YearRange::new("2010", "2015").into_cells(),
            (CellValue::text("2010"), CellValue::text("2015"))
        );
    }
}
