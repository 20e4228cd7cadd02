//! Table builder
//!
//! A simple HTML table with a column count fixed at construction. Rows can
//! be added, inserted, and removed; an optional main header sits above the
//! body without being stored among the body rows. Merged cells beyond the
//! full-width spanning rows offered here can be built directly with
//! [`markup_element::Element`].

mod row_source;
mod table;

pub use row_source::{RowSource, VecRowSource};
pub use table::{Table, TableError};
