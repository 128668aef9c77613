//! Table state store and action dispatcher.

use tracing::{debug, info};

use super::{
    ColumnDef, ColumnFilter, ColumnVisibility, DerivedView, Pagination, RowId, RowSelection,
    SelectionOutcome, SortState, TableRow, derive_view,
};
use crate::config::TableOptions;
use crate::view::TableViewModel;

/// Mutable state slices of one table. Each slice is owned by its controller.
#[derive(Debug, Clone)]
pub struct TableState {
    pub sort: SortState,
    pub filter: ColumnFilter,
    pub visibility: ColumnVisibility,
    pub pagination: Pagination,
    pub selection: RowSelection,
}

/// User-facing transient message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Every state transition a table accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    ToggleSort(String),
    SetFilter(String),
    ToggleColumn { id: String, visible: bool },
    FlipColumn(String),
    ShowAllColumns,
    HideAllColumns,
    SetPageSize(usize),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    ToggleRow { id: RowId, selected: bool },
    ToggleAllOnPage(bool),
    ClearSelection,
    SetLoading(bool),
}

impl TableAction {
    /// Actions on rows the loading placeholder hides. They are dropped while loading.
    fn needs_rows(&self) -> bool {
        matches!(
            self,
            Self::ToggleSort(_)
                | Self::SetPageSize(_)
                | Self::FirstPage
                | Self::PreviousPage
                | Self::NextPage
                | Self::LastPage
                | Self::ToggleRow { .. }
                | Self::ToggleAllOnPage(_)
                | Self::ClearSelection
        )
    }
}

/// Rows, column definitions and table state behind a single dispatcher.
#[derive(Debug)]
pub struct DataTable<T> {
    rows: Vec<T>,
    columns: Vec<ColumnDef<T>>,
    options: TableOptions,
    loading: bool,
    state: TableState,
}

impl<T: TableRow> DataTable<T> {
    pub fn new(rows: Vec<T>, columns: Vec<ColumnDef<T>>, options: TableOptions) -> Self {
        let state = TableState {
            sort: SortState::default(),
            filter: ColumnFilter::new(options.filter_key.clone()),
            visibility: ColumnVisibility::from_columns(&columns),
            pagination: Pagination::new(options.page_size, options.page_size_options.clone()),
            selection: RowSelection::new(options.max_rows_selection),
        };
        Self {
            rows,
            columns,
            options,
            loading: false,
            state,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    /// Columns currently rendered, in definition order.
    pub fn visible_columns(&self) -> Vec<&ColumnDef<T>> {
        self.columns
            .iter()
            .filter(|c| self.state.visibility.is_visible(&c.id))
            .collect()
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Derived rows for the current state.
    pub fn view(&self) -> DerivedView<'_, T> {
        derive_view(
            &self.rows,
            &self.columns,
            &self.state.sort,
            &self.state.filter,
            &self.state.pagination,
        )
    }

    /// Renderer output for the current state.
    pub fn view_model(&self) -> TableViewModel {
        TableViewModel::build(self)
    }

    /// Replaces the row set. Selections of rows that no longer exist are
    /// dropped and the page index is clamped.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        let stale: Vec<RowId> = self
            .state
            .selection
            .ids()
            .filter(|id| !rows.iter().any(|r| r.id() == *id))
            .collect();
        for id in stale {
            self.state.selection.toggle(id, false);
        }
        self.rows = rows;
        self.clamp_page();
        debug!(rows = self.rows.len(), "rows replaced");
    }

    fn filtered_total(&self) -> usize {
        self.view().total()
    }

    fn clamp_page(&mut self) {
        let total = self.filtered_total();
        self.state.pagination.clamp(total);
    }

    /// Applies one action and returns the notices it raised.
    pub fn dispatch(&mut self, action: TableAction) -> Vec<Notice> {
        let mut notices = Vec::new();
        if self.loading && action.needs_rows() {
            debug!(?action, "action ignored while loading");
            return notices;
        }
        match action {
            TableAction::ToggleSort(column_id) => {
                let sortable = self.columns.iter().any(|c| c.id == column_id && c.sortable);
                if sortable {
                    self.state.sort.toggle(&column_id);
                    self.state.pagination.reset();
                    debug!(column = %column_id, sort = ?self.state.sort.active(), "sort changed");
                } else {
                    debug!(column = %column_id, "sort ignored on non-sortable column");
                }
            }
            TableAction::SetFilter(text) => {
                self.state.filter.set(text);
                self.state.pagination.reset();
            }
            TableAction::ToggleColumn { id, visible } => {
                if !self.state.visibility.toggle(&id, visible) {
                    debug!(column = %id, visible, "column toggle rejected");
                }
            }
            TableAction::FlipColumn(id) => {
                if !self.state.visibility.flip(&id) {
                    debug!(column = %id, "column flip rejected");
                }
            }
            TableAction::ShowAllColumns => self.state.visibility.select_all(),
            TableAction::HideAllColumns => self.state.visibility.deselect_all(),
            TableAction::SetPageSize(size) => {
                let total = self.filtered_total();
                if !self.state.pagination.set_page_size(size, total) {
                    debug!(size, "page size not among options");
                }
            }
            TableAction::FirstPage => self.state.pagination.first(),
            TableAction::PreviousPage => self.state.pagination.previous(),
            TableAction::NextPage => {
                let total = self.filtered_total();
                self.state.pagination.next(total);
            }
            TableAction::LastPage => {
                let total = self.filtered_total();
                self.state.pagination.last(total);
            }
            TableAction::ToggleRow { id, selected } => {
                if !self.options.enable_row_selection {
                    return notices;
                }
                if self.state.selection.toggle(id, selected) == SelectionOutcome::Rejected {
                    debug!(row = id, max = self.state.selection.max(), "row selection at cap");
                }
            }
            TableAction::ToggleAllOnPage(selected) => {
                if !self.options.enable_row_selection {
                    return notices;
                }
                let page_ids = self.view().page_ids();
                if self.state.selection.toggle_page(&page_ids, selected) == SelectionOutcome::Rejected {
                    let message = self.state.selection.cap_notice(self.options.entity_label());
                    info!(page_rows = page_ids.len(), "{}", message);
                    notices.push(Notice { message });
                }
            }
            TableAction::ClearSelection => self.state.selection.clear(),
            TableAction::SetLoading(loading) => self.loading = loading,
        }
        self.clamp_page();
        notices
    }
}
