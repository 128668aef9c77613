//! Pure view derivation: filter, sort and paginate rows.

use std::cmp::Ordering;

use super::{CellValue, ColumnDef, ColumnFilter, Pagination, RowId, SortDirection, SortKey, SortState, TableRow};

/// Rows in display order plus the current page slice.
#[derive(Debug)]
pub struct DerivedView<'a, T> {
    /// Filtered rows in sort order.
    pub rows: Vec<&'a T>,
    /// Zero-based page index, clamped to `0..page_count`.
    pub page_index: usize,
    pub page_count: usize,
    page_start: usize,
    page_end: usize,
}

impl<'a, T: TableRow> DerivedView<'a, T> {
    /// Number of rows after filtering.
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> &[&'a T] {
        &self.rows[self.page_start..self.page_end]
    }

    /// Ids of the current page rows, in display order.
    pub fn page_ids(&self) -> Vec<RowId> {
        self.page_rows().iter().map(|r| r.id()).collect()
    }
}

/// Text the filter compares against. Missing values never match.
fn filter_text(value: &CellValue) -> String {
    match value {
        CellValue::Missing => String::new(),
        other => other.display(),
    }
}

/// Orders two keys, keeping missing values last in both directions.
fn compare(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match (a, b) {
        (SortKey::Missing, SortKey::Missing) => Ordering::Equal,
        (SortKey::Missing, _) => Ordering::Greater,
        (_, SortKey::Missing) => Ordering::Less,
        _ => {
            let cmp = a.cmp(b);
            match direction {
                SortDirection::Ascending => cmp,
                SortDirection::Descending => cmp.reverse(),
            }
        }
    }
}

/// Derives the displayed rows from `rows` and table state.
///
/// Rows are filtered on the filter's bound column, then stably sorted by the
/// sort column. A filter bound to an unknown column keeps every row. The
/// returned page index is clamped; `pagination` itself is not mutated.
pub fn derive_view<'a, T: TableRow>(
    rows: &'a [T],
    columns: &[ColumnDef<T>],
    sort: &SortState,
    filter: &ColumnFilter,
    pagination: &Pagination,
) -> DerivedView<'a, T> {
    let filter_column = columns.iter().find(|c| c.id == filter.column_id());

    let mut out: Vec<&T> = rows
        .iter()
        .filter(|row| match filter_column {
            Some(col) if filter.is_active() => filter.matches(&filter_text(&col.value(row))),
            _ => true,
        })
        .collect();

    if let Some((col_id, direction)) = sort.active()
        && let Some(col) = columns.iter().find(|c| c.id == col_id && c.sortable)
    {
        let mut keyed: Vec<(SortKey, &T)> = out.iter().map(|r| (col.value(r).sort_key(), *r)).collect();
        keyed.sort_by(|(a, _), (b, _)| compare(a, b, direction));
        out = keyed.into_iter().map(|(_, r)| r).collect();
    }

    let total = out.len();
    let page_count = pagination.page_count(total);
    let page_index = pagination.page_index().min(page_count - 1);
    let page_start = (page_index * pagination.page_size()).min(total);
    let page_end = (page_start + pagination.page_size()).min(total);

    DerivedView {
        rows: out,
        page_index,
        page_count,
        page_start,
        page_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        id: u64,
        name: Option<&'static str>,
        score: Option<i64>,
    }

    impl TableRow for Item {
        fn id(&self) -> RowId {
            self.id
        }
    }

    fn columns() -> Vec<ColumnDef<Item>> {
        vec![
            ColumnDef::new("name", "Name", |i: &Item| CellValue::text(i.name)),
            ColumnDef::new("score", "Score", |i: &Item| {
                i.score.map_or(CellValue::Missing, CellValue::Integer)
            }),
            ColumnDef::new("fixed", "Fixed", |_: &Item| CellValue::Integer(0)).not_sortable(),
        ]
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, name: Some("Nord Star"), score: Some(30) },
            Item { id: 2, name: Some("Hafnia Leo"), score: None },
            Item { id: 3, name: None, score: Some(10) },
            Item { id: 4, name: Some("Leopard"), score: Some(20) },
            Item { id: 5, name: Some("Ocean Leo"), score: Some(10) },
        ]
    }

    fn ids(view: &DerivedView<'_, Item>) -> Vec<RowId> {
        view.rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn unsorted_unfiltered_keeps_input_order() {
        let rows = items();
        let view = derive_view(
            &rows,
            &columns(),
            &SortState::default(),
            &ColumnFilter::new("name"),
            &Pagination::default(),
        );
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.total(), 5);
    }

    #[test]
    fn filter_is_case_insensitive_and_skips_missing() {
        let rows = items();
        let mut filter = ColumnFilter::new("name");
        filter.set("LEO");
        let view = derive_view(&rows, &columns(), &SortState::default(), &filter, &Pagination::default());
        assert_eq!(ids(&view), vec![2, 4, 5]);

        filter.set("-");
        let view = derive_view(&rows, &columns(), &SortState::default(), &filter, &Pagination::default());
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 1);
        assert!(view.page_rows().is_empty());
    }

    #[test]
    fn unknown_filter_column_keeps_rows() {
        let rows = items();
        let mut filter = ColumnFilter::new("nope");
        filter.set("zzz");
        let view = derive_view(&rows, &columns(), &SortState::default(), &filter, &Pagination::default());
        assert_eq!(view.total(), 5);
    }

    #[test]
    fn sort_is_stable_with_missing_last() {
        let rows = items();
        let mut sort = SortState::default();
        sort.set("score", SortDirection::Ascending);
        let view = derive_view(&rows, &columns(), &sort, &ColumnFilter::new("name"), &Pagination::default());
        assert_eq!(ids(&view), vec![3, 5, 4, 1, 2]);

        sort.set("score", SortDirection::Descending);
        let view = derive_view(&rows, &columns(), &sort, &ColumnFilter::new("name"), &Pagination::default());
        assert_eq!(ids(&view), vec![1, 4, 3, 5, 2]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let rows = items();
        let mut sort = SortState::default();
        sort.set("name", SortDirection::Ascending);
        let view = derive_view(&rows, &columns(), &sort, &ColumnFilter::new("name"), &Pagination::default());
        assert_eq!(ids(&view), vec![2, 4, 1, 5, 3]);
    }

    #[test]
    fn non_sortable_column_is_ignored() {
        let rows = items();
        let mut sort = SortState::default();
        sort.set("fixed", SortDirection::Descending);
        let view = derive_view(&rows, &columns(), &sort, &ColumnFilter::new("name"), &Pagination::default());
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn pages_are_sliced_and_clamped() {
        let rows: Vec<Item> = (1..=25)
            .map(|id| Item { id, name: Some("x"), score: Some(id as i64) })
            .collect();
        let mut pg = Pagination::new(10, vec![10, 20]);
        pg.last(25);
        let view = derive_view(&rows, &columns(), &SortState::default(), &ColumnFilter::new("name"), &pg);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.page_index, 2);
        assert_eq!(view.page_ids(), vec![21, 22, 23, 24, 25]);

        let mut filter = ColumnFilter::new("name");
        filter.set("y");
        let view = derive_view(&rows, &columns(), &SortState::default(), &filter, &pg);
        assert_eq!(view.page_index, 0);
        assert!(view.page_ids().is_empty());
    }

    #[test]
    fn derivation_is_deterministic() {
        let rows = items();
        let mut sort = SortState::default();
        sort.set("score", SortDirection::Descending);
        let filter = ColumnFilter::new("name");
        let pg = Pagination::default();
        let a = ids(&derive_view(&rows, &columns(), &sort, &filter, &pg));
        let b = ids(&derive_view(&rows, &columns(), &sort, &filter, &pg));
        assert_eq!(a, b);
    }
}
