//! A minimal column-named table, the built-in read/combine target.
//!
//! `TableReader` reads one CSV or JSON source into a `Table`; `VStack`
//! stacks the per-source tables in source order.

use std::fmt;

use thiserror::Error;

mod reader;
#[cfg(feature = "async")]
mod async_reader;

#[cfg(feature = "async")]
pub use async_reader::AsyncTableReader;
pub use reader::{TableReader, VStack};

/// A single table value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Infer a cell from a text field.
    ///
    /// Empty fields are null; then booleans, integers and floats are tried
    /// in that order before falling back to text.
    pub fn parse(field: &str) -> Self {
        let field = field.trim();
        if field.is_empty() {
            return Cell::Null;
        }
        if field.eq_ignore_ascii_case("true") {
            return Cell::Bool(true);
        }
        if field.eq_ignore_ascii_case("false") {
            return Cell::Bool(false);
        }
        if let Ok(i) = field.parse::<i64>() {
            return Cell::Int(i);
        }
        if let Ok(f) = field.parse::<f64>() {
            return Cell::Float(f);
        }
        Cell::Text(field.to_string())
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

/// Floats always carry a decimal point or exponent, so written text parses
/// back to the same variant.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(x) => write!(f, "{x:?}"),
            Cell::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Cell {
    fn from(i: i64) -> Self {
        Cell::Int(i)
    }
}

impl From<f64> for Cell {
    fn from(f: f64) -> Self {
        Cell::Float(f)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// Errors from building or stacking tables.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("cannot stack an empty list of tables")]
    Empty,

    /// A table's columns differ from the first table's.
    #[error("table #{index} has columns {found:?}, expected {expected:?}")]
    ColumnMismatch {
        index: usize,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("row has {found} cells, expected {expected}")]
    RowLength { expected: usize, found: usize },
}

/// Rows of cells under a fixed list of column names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new<I, T>(columns: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Cells of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Cell>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Append a row; its length must match the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowLength {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Stack tables vertically, in the order given.
    ///
    /// Every table must have the same column names, in the same order.
    pub fn vstack(tables: Vec<Table>) -> Result<Table, TableError> {
        let mut tables = tables.into_iter();
        let mut out = tables.next().ok_or(TableError::Empty)?;

        for (i, table) in tables.enumerate() {
            if table.columns != out.columns {
                return Err(TableError::ColumnMismatch {
                    index: i + 1,
                    expected: out.columns.clone(),
                    found: table.columns,
                });
            }
            out.rows.extend(table.rows);
        }
        Ok(out)
    }

    /// Write the table as CSV, header row first.
    #[cfg(feature = "csv")]
    pub fn write_csv(&self, writer: &mut dyn std::io::Write) -> Result<(), crate::format::FormatError> {
        crate::format::csv::encode(self, writer)
    }
}
