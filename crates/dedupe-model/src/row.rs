//! Ordered column/value rows.

use std::sync::Arc;

/// One record of a tabular file.
///
/// Column names are shared by every row read from the same file; iteration
/// follows the header order. A record shorter than the header lacks the
/// trailing columns entirely, so [`Row::get`] reports them as absent rather
/// than empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Builds a row over a shared header. Values past the end of the header
    /// are discarded.
    pub fn new(columns: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.truncate(columns.len());
        Self { columns, values }
    }

    /// Builds a standalone row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (columns, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(column, value)| (column.into(), value.into()))
            .unzip();
        Self {
            columns: columns.into(),
            values,
        }
    }

    /// Returns the value stored under `column`.
    ///
    /// When the header repeats a name, the rightmost column wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        let index = self.columns().iter().rposition(|name| name == column)?;
        Some(self.values[index].as_str())
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns().iter().any(|name| name == column)
    }

    /// Column names present in this row, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns[..self.values.len()]
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns()
            .iter()
            .zip(&self.values)
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
