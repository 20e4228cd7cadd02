//! Tabular row sources
//!
//! Seam for feeding externally produced result sets (database queries,
//! CSV readers) into a [`Table`] without the core knowing where the rows
//! came from. A source is just an ordered sequence of named-column rows.

use crate::{Table, TableError};

/// An ordered sequence of named-column rows.
pub trait RowSource {
    /// Column names, in order. These become the table's main header.
    fn column_names(&self) -> Vec<String>;

    /// Rows in order; each row's cells are ordered to match
    /// [`RowSource::column_names`].
    fn rows(&self) -> Vec<Vec<String>>;
}

/// In-memory row source, mostly useful for tests and small fixed tables.
#[derive(Debug, Clone, Default)]
pub struct VecRowSource {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl VecRowSource {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }
}

impl RowSource for VecRowSource {
    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows.clone()
    }
}

impl Table {
    /// Build a table from a row source: one column per column name (which
    /// become the main header), one body row per source row.
    ///
    /// Fails on the first row whose cell count does not match the column
    /// count; no partial table is returned.
    pub fn from_row_source(source: &impl RowSource) -> Result<Table, TableError> {
        let columns = source.column_names();
        let headers: Vec<&str> = columns.iter().map(String::as_str).collect();
        let mut table = Table::with_header(columns.len(), &headers)?;
        for row in source.rows() {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            let _ = table.add_row(&cells)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_row_source() {
        let mut source = VecRowSource::new(["Class", "Instructor"]);
        source.push_row(["ECE 201", "Smith"]);
        source.push_row(["ECE 315", "Jones"]);

        let table = Table::from_row_source(&source).unwrap();
        assert_eq!(table.cols(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.header_strings(),
            Some(vec!["Class".to_string(), "Instructor".to_string()])
        );
        assert_eq!(
            table.row_strings(1),
            Some(vec!["ECE 315".to_string(), "Jones".to_string()])
        );
    }

    #[test]
    fn test_ragged_source_rejected() {
        let mut source = VecRowSource::new(["A", "B"]);
        source.push_row(["only one"]);

        assert!(Table::from_row_source(&source).is_err());
    }
}
