//! Table type and row operations

use std::fmt;

use markup_element::Element;
use tracing::warn;

/// Errors from structural table operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("expected {expected} cells, got {got}")]
    ColumnCountMismatch { expected: usize, got: usize },
}

/// A fixed-column table of rows.
///
/// Body rows are `tr` children of the table element; cells are `td` (or
/// `th` for header rows) children of each row. Row index 0 is the first
/// body row; the main header is kept apart and only joins the output during
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    cols: usize,
    element: Element,
    header: Option<Element>,
}

impl Table {
    /// Create a table with `cols` columns and no main header.
    pub fn new(cols: usize) -> Self {
        Self {
            cols,
            element: Element::new("table"),
            header: None,
        }
    }

    /// Create a table with a main header row; `headers.len()` must equal
    /// `cols`.
    pub fn with_header(cols: usize, headers: &[&str]) -> Result<Self, TableError> {
        let mut table = Self::new(cols);
        let _ = table.set_header(headers)?;
        Ok(table)
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of body rows (main header excluded)
    pub fn row_count(&self) -> usize {
        self.element.child_count()
    }

    // Main header

    /// Replace the main header, returning the previous header row if any.
    pub fn set_header(&mut self, headers: &[&str]) -> Result<Option<Element>, TableError> {
        if headers.len() != self.cols {
            return Err(TableError::ColumnCountMismatch {
                expected: self.cols,
                got: headers.len(),
            });
        }
        let mut row = Element::new("tr");
        for text in headers {
            let _ = row.append_child(Element::new("th").with_inner(*text));
        }
        Ok(self.header.replace(row))
    }

    /// The main header row, if set.
    pub fn header(&self) -> Option<&Element> {
        self.header.as_ref()
    }

    /// Main header cell contents, if a header is set.
    pub fn header_strings(&self) -> Option<Vec<String>> {
        self.header
            .as_ref()
            .map(|row| row.iter().map(|cell| cell.inner().to_string()).collect())
    }

    /// Remove the main header, returning it if one was set.
    pub fn clear_header(&mut self) -> Option<Element> {
        self.header.take()
    }

    // Body rows

    /// Append a body row; the cell count must equal the column count.
    ///
    /// Returns the new row count. On a mismatch the row count is unchanged.
    pub fn add_row(&mut self, cells: &[&str]) -> Result<usize, TableError> {
        let index = self.row_count();
        self.insert_row(index, cells)
    }

    /// Insert a body row at `index` (clamped to the row count).
    pub fn insert_row(&mut self, index: usize, cells: &[&str]) -> Result<usize, TableError> {
        let row = self.build_row("td", cells)?;
        Ok(self.element.insert_child(index, row))
    }

    /// Append a header row (`th` cells) to the body. Does not touch the
    /// main header.
    pub fn add_header_row(&mut self, cells: &[&str]) -> Result<usize, TableError> {
        let index = self.row_count();
        self.insert_header_row(index, cells)
    }

    /// Insert a body header row at `index` (clamped to the row count).
    pub fn insert_header_row(&mut self, index: usize, cells: &[&str]) -> Result<usize, TableError> {
        let row = self.build_row("th", cells)?;
        Ok(self.element.insert_child(index, row))
    }

    /// Append a row with a single cell spanning every column.
    pub fn add_spanning_row(&mut self, text: &str) -> usize {
        let index = self.row_count();
        self.insert_spanning_row(index, text)
    }

    /// Insert a spanning row at `index` (clamped to the row count).
    pub fn insert_spanning_row(&mut self, index: usize, text: &str) -> usize {
        let row = self.build_spanning_row("td", text);
        self.element.insert_child(index, row)
    }

    /// Append a header row with a single cell spanning every column.
    pub fn add_spanning_header_row(&mut self, text: &str) -> usize {
        let index = self.row_count();
        self.insert_spanning_header_row(index, text)
    }

    /// Insert a spanning header row at `index` (clamped to the row count).
    pub fn insert_spanning_header_row(&mut self, index: usize, text: &str) -> usize {
        let row = self.build_spanning_row("th", text);
        self.element.insert_child(index, row)
    }

    fn build_row(&self, cell_tag: &str, cells: &[&str]) -> Result<Element, TableError> {
        if cells.len() != self.cols {
            warn!(
                expected = self.cols,
                got = cells.len(),
                "rejecting row with wrong cell count"
            );
            return Err(TableError::ColumnCountMismatch {
                expected: self.cols,
                got: cells.len(),
            });
        }
        let mut row = Element::new("tr");
        for text in cells {
            let _ = row.append_child(Element::new(cell_tag).with_inner(*text));
        }
        Ok(row)
    }

    fn build_spanning_row(&self, cell_tag: &str, text: &str) -> Element {
        let mut row = Element::new("tr");
        let _ = row.append_child(
            Element::new(cell_tag)
                .with_inner(text)
                .with_attr("colspan", self.cols.to_string()),
        );
        row
    }

    /// Body row at `index`.
    pub fn row(&self, index: usize) -> Option<&Element> {
        self.element.child(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.element.child_mut(index)
    }

    /// Cell contents of the body row at `index`.
    pub fn row_strings(&self, index: usize) -> Option<Vec<String>> {
        self.element
            .child(index)
            .map(|row| row.iter().map(|cell| cell.inner().to_string()).collect())
    }

    /// Remove and return the body row at `index`, or `None` if out of range.
    pub fn remove_row(&mut self, index: usize) -> Option<Element> {
        self.element.remove_child(index)
    }

    /// Body rows in order
    pub fn rows(&self) -> impl Iterator<Item = &Element> {
        self.element.iter()
    }

    // Element passthrough

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.element.attribute(name)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.element.set_attribute(name, value)
    }

    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        self.element.add_attribute(name, value)
    }

    pub fn set_style_rule(
        &mut self,
        rule: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.element.set_style_rule(rule, value)
    }

    /// Render the table: main header first when set, then the body rows.
    ///
    /// A pure computation over the stored state; the header is never spliced
    /// into the body, so repeated renders emit it exactly once each.
    pub fn render(&self) -> String {
        let mut out = self.element.start_tag();
        if let Some(header) = &self.header {
            out.push_str(&header.render());
        }
        for row in self.element.iter() {
            out.push_str(&row.render());
        }
        out.push_str(&self.element.end_tag());
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
