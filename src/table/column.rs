//! Column definitions.

use std::fmt;

use super::CellValue;

/// Column configuration for rows of type `T`.
///
/// # Examples
///
/// ```
/// use vesselboard::table::{CellValue, ColumnDef};
///
/// struct Ship { name: String, age: u32 }
///
/// let columns: Vec<ColumnDef<Ship>> = vec![
///     ColumnDef::new("name", "Name", |s: &Ship| CellValue::Text(s.name.clone())).width(20),
///     ColumnDef::new("age", "Age", |s: &Ship| CellValue::Integer(s.age as i64)).not_hideable(),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[1].hideable);
/// ```
pub struct ColumnDef<T> {
    /// Unique column id. Filter and visibility state refer to columns by id.
    pub id: String,
    /// Header label.
    pub header: String,
    /// Fixed width in terminal columns, if any.
    pub width: Option<u16>,
    /// Whether header clicks cycle the sort on this column.
    pub sortable: bool,
    /// Whether the column can be hidden from the settings popup.
    pub hideable: bool,
    accessor: fn(&T) -> CellValue,
}

impl<T> ColumnDef<T> {
    /// Creates a sortable, hideable column without a fixed width.
    pub fn new(id: impl Into<String>, header: impl Into<String>, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: None,
            sortable: true,
            hideable: true,
            accessor,
        }
    }

    /// Sets a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Disables sorting on this column.
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Keeps this column always rendered.
    pub fn not_hideable(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Field value for `row`.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Rendered cell text for `row`.
    pub fn render(&self, row: &T) -> String {
        self.value(row).display()
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            width: self.width,
            sortable: self.sortable,
            hideable: self.hideable,
            accessor: self.accessor,
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .field("hideable", &self.hideable)
            .finish()
    }
}
