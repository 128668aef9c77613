//! Generic data-table engine: column definitions, sorting, single-column
//! filtering, pagination, capped row selection and column visibility.
//!
//! Each controller owns one slice of [`TableState`] and validates its own
//! invariant before committing a change. [`DataTable`] composes them behind a
//! single [`DataTable::dispatch`] entry point, and [`derive_view`] turns rows
//! plus state into the ordered, paginated view that renderers consume.

mod column;
mod filter;
mod model;
mod pagination;
mod selection;
mod sorting;
mod store;
mod visibility;

pub use column::ColumnDef;
pub use filter::ColumnFilter;
pub use model::{DerivedView, derive_view};
pub use pagination::{DEFAULT_PAGE_SIZE_OPTIONS, Pagination};
pub use selection::{CheckState, DEFAULT_MAX_SELECTION, RowSelection, SelectionOutcome};
pub use sorting::{SortDirection, SortState};
pub use store::{DataTable, Notice, TableAction, TableState};
pub use visibility::ColumnVisibility;

use crate::fmt::{PLACEHOLDER, format_currency, format_percent};

/// Stable row identifier.
pub type RowId = u64;

/// Trait for records displayed by a [`DataTable`].
pub trait TableRow {
    /// Unique identifier, stable across sorting, filtering and paging.
    fn id(&self) -> RowId;
}

/// Field value produced by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Percentage points, rendered with a `%` suffix.
    Percent(f64),
    /// Amount in US dollars.
    Money(f64),
    /// Absent field. Rendered as a placeholder, sorted last.
    Missing,
}

impl CellValue {
    /// Builds a text cell, mapping `None` to [`CellValue::Missing`].
    pub fn text(value: Option<impl Into<String>>) -> Self {
        value.map_or(Self::Missing, |v| Self::Text(v.into()))
    }

    /// Displayed text. Never fails: absent and non-finite values render as
    /// a placeholder.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Float(f) if f.is_finite() => format!("{:.2}", f),
            CellValue::Float(_) => PLACEHOLDER.to_string(),
            CellValue::Percent(p) => format_percent(*p),
            CellValue::Money(m) => format_currency(Some(*m)),
            CellValue::Missing => PLACEHOLDER.to_string(),
        }
    }

    /// Key used to order rows by this value.
    pub fn sort_key(&self) -> SortKey {
        match self {
            CellValue::Text(s) => SortKey::String(s.to_lowercase()),
            CellValue::Integer(n) => SortKey::Integer(*n),
            CellValue::Float(f) | CellValue::Percent(f) | CellValue::Money(f) if f.is_finite() => {
                SortKey::Float(*f)
            }
            _ => SortKey::Missing,
        }
    }
}

/// Sort key types for table columns.
///
/// Keys are totally ordered: numbers, then strings, then `Missing`. Integers
/// and floats compare by value, NaN above every other number.
#[derive(Debug, Clone)]
pub enum SortKey {
    Integer(i64),
    Float(f64),
    String(String),
    Missing,
}

impl SortKey {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Integer(_) | SortKey::Float(_) => 0,
            SortKey::String(_) => 1,
            SortKey::Missing => 2,
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match (self, other) {
            (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Integer(a), SortKey::Float(b)) => (*a as f64).total_cmp(b),
            (SortKey::Float(a), SortKey::Integer(b)) => a.total_cmp(&(*b as f64)),
            (SortKey::String(a), SortKey::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for SortKey {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_render_placeholder() {
        assert_eq!(CellValue::Missing.display(), "--");
        assert_eq!(CellValue::Float(f64::NAN).display(), "--");
        assert_eq!(CellValue::Money(f64::NAN).display(), "--");
        assert_eq!(CellValue::Percent(f64::INFINITY).display(), "--");
        assert!(matches!(CellValue::Money(f64::NAN).sort_key(), SortKey::Missing));
        assert_eq!(CellValue::text(None::<String>).display(), "--");
    }

    #[test]
    fn display_by_kind() {
        assert_eq!(CellValue::Integer(12).display(), "12");
        assert_eq!(CellValue::Percent(85.0).display(), "85%");
        assert_eq!(CellValue::Money(45303.0).display(), "$45,303.00");
        assert_eq!(CellValue::text(Some("LR2")).display(), "LR2");
    }

    #[test]
    fn missing_sorts_after_values() {
        assert!(SortKey::Integer(1) < SortKey::Missing);
        assert!(SortKey::Missing > SortKey::String("z".into()));
        assert!(SortKey::Integer(2) < SortKey::Float(2.5));
        assert_eq!(
            SortKey::Missing.partial_cmp(&SortKey::Missing),
            Some(std::cmp::Ordering::Equal)
        );
    }

    #[test]
    fn mixed_kinds_have_a_total_order() {
        use std::cmp::Ordering;

        let mut keys = vec![
            SortKey::String("b".into()),
            SortKey::Missing,
            SortKey::Float(f64::NAN),
            SortKey::Integer(3),
            SortKey::String("a".into()),
            SortKey::Float(-1.5),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                SortKey::Float(-1.5),
                SortKey::Integer(3),
                SortKey::Float(f64::NAN),
                SortKey::String("a".into()),
                SortKey::String("b".into()),
                SortKey::Missing,
            ]
        );
        assert_eq!(SortKey::Integer(10).cmp(&SortKey::String("1".into())), Ordering::Less);
        assert_eq!(SortKey::Float(f64::NAN), SortKey::Float(f64::NAN));
    }
}
