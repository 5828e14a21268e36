//! Generic in-memory table
//!
//! A [`Table`] is an ordered list of rows of one record type. The record type
//! fixes the table name and column order through [`TableRecord`]; the export
//! layer relies on that order matching the record's serialized field order.

use serde::Serialize;

/// A row type with a stable table name and column contract
pub trait TableRecord: Serialize {
    /// Name of the table this record belongs to
    const TABLE_NAME: &'static str;

    /// Column names in serialization order
    const COLUMNS: &'static [&'static str];
}

/// Ordered rows of a single record type
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    rows: Vec<R>,
}

impl<R: TableRecord> Table<R> {
    /// Wrap already-ordered rows
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    /// Table name
    pub fn name(&self) -> &'static str {
        R::TABLE_NAME
    }

    /// Column names in order
    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    /// All rows in order
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Iterate over rows in order
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a, R: TableRecord> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
