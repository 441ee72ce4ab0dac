pub mod build;
pub mod filter;
pub mod load;
pub mod numeric;

use std::collections::HashMap;

use thiserror::Error;

use crate::input::InputError;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("no column headers found")]
    NoHeaders,
    #[error("duplicate column name: {0:?}")]
    DuplicateColumn(String),
    #[error("{column} not in column headers; headers: {headers:?}")]
    MissingColumn {
        column: String,
        headers: Vec<String>,
    },
    #[error("data row {row} has {found} fields, expected at least {expected}")]
    FieldOutOfRange {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("non-numeric value {value:?} in column {column} at data row {row}")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

/// Columnar table with a fixed, ordered header schema.
///
/// Every column always holds the same number of values; rows only enter
/// through [`Table::push_row`] and only leave through [`Table::retain_rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    columns: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Result<Self, TableError> {
        let mut index = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }
        let columns = vec![Vec::new(); headers.len()];
        Ok(Self {
            headers,
            index,
            columns,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.index.get(name).map(|&i| self.columns[i].as_slice())
    }

    pub fn require_column(&self, name: &str) -> Result<&[String], TableError> {
        self.column(name).ok_or_else(|| TableError::MissingColumn {
            column: name.to_string(),
            headers: self.headers.clone(),
        })
    }

    /// Append one record. Fields past the header width are ignored.
    pub fn push_row(&mut self, mut fields: Vec<String>) -> Result<(), TableError> {
        let expected = self.headers.len();
        if fields.len() < expected {
            return Err(TableError::FieldOutOfRange {
                row: self.n_rows() + 1,
                expected,
                found: fields.len(),
            });
        }
        fields.truncate(expected);
        for (column, value) in self.columns.iter_mut().zip(fields) {
            column.push(value);
        }
        Ok(())
    }

    /// Keep row `i` iff `keep[i]`; returns the number of rows dropped.
    pub fn retain_rows(&mut self, keep: &[bool]) -> usize {
        debug_assert_eq!(keep.len(), self.n_rows());
        let before = self.n_rows();
        for column in &mut self.columns {
            let mut mask = keep.iter();
            column.retain(|_| mask.next().copied().unwrap_or(false));
        }
        before - self.n_rows()
    }

    /// Rows in header order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.n_rows()).map(|i| self.columns.iter().map(|c| c[i].as_str()).collect())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/mod.rs"]
mod tests;
