use crate::domain::models::CellValue;

/// Header plus rows, every row exactly as wide as the header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Short rows are padded with nulls and long rows cut to the header width.
    pub fn push_row(&mut self, mut values: Vec<CellValue>) {
        values.resize(self.columns.len(), CellValue::Null);
        self.rows.push(values);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|values| Record {
            columns: &self.columns,
            values,
        })
    }

    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.rows.get(index).map(|values| Record {
            columns: &self.columns,
            values,
        })
    }

    /// Removes a column and hands back its values in row order.
    pub fn take_column(&mut self, index: usize) -> Vec<CellValue> {
        self.columns.remove(index);
        self.rows.iter_mut().map(|row| row.remove(index)).collect()
    }

    /// Appends a column at the end; `values` must hold one entry per row.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<CellValue>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.columns.push(name.into());
        let mut values = values.into_iter();
        for row in self.rows.iter_mut() {
            row.push(values.next().unwrap_or(CellValue::Null));
        }
    }
}

/// One row viewed together with its column names.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    columns: &'a [String],
    values: &'a [CellValue],
}

impl<'a> Record<'a> {
    pub fn new(columns: &'a [String], values: &'a [CellValue]) -> Self {
        Self { columns, values }
    }

    pub fn columns(&self) -> &'a [String] {
        self.columns
    }

    pub fn values(&self) -> &'a [CellValue] {
        self.values
    }

    pub fn get(&self, column: &str) -> Option<&'a CellValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a CellValue)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}
