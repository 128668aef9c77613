//! Application state management.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use ratatui::widgets::TableState as RatatuiTableState;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::models::Vessel;
use crate::models::trend::TrendChart;
use crate::month_range::{MonthRangePicker, TrendBound};
use crate::table::{DataTable, RowId, TableAction, TableRow};

use super::notice::NoticeQueue;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
    /// Column settings, cursor over the hideable columns.
    Columns { cursor: usize },
    /// Month-range picker, cursor over the 12-month grid. `trend` is the
    /// focused trend date field, `None` while the grid has focus.
    MonthPicker {
        cursor: usize,
        trend: Option<TrendBound>,
    },
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Whole-screen state of the dashboard.
pub struct AppState {
    pub table: DataTable<Vessel>,
    pub chart: TrendChart,
    pub months: MonthRangePicker,
    pub notices: NoticeQueue,
    pub input_mode: InputMode,
    /// Text being typed in filter mode.
    pub filter_input: String,
    pub popup: PopupState,
    /// Row cursor within the current page.
    pub row_cursor: usize,
    /// Column cursor within the visible columns.
    pub column_cursor: usize,
    pub ratatui_state: RatatuiTableState,
    /// Loading clears once this instant passes.
    pub loading_until: Option<Instant>,
    pub loading_delay: Duration,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(table: DataTable<Vessel>, config: &DashboardConfig, today: NaiveDate) -> Self {
        Self {
            table,
            chart: TrendChart::default(),
            months: MonthRangePicker::new(today),
            notices: NoticeQueue::new(Duration::from_millis(config.notice_duration_ms)),
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            popup: PopupState::None,
            row_cursor: 0,
            column_cursor: 0,
            ratatui_state: RatatuiTableState::default(),
            loading_until: None,
            loading_delay: Duration::from_millis(config.loading_delay_ms),
            status_message: None,
        }
    }

    /// Dispatches a table action, queues its notices and keeps cursors valid.
    pub fn apply(&mut self, action: TableAction, now: Instant) {
        for notice in self.table.dispatch(action) {
            self.notices.push(notice, now);
        }
        self.clamp_cursors();
    }

    /// Sets the loading flag until `loading_delay` has passed.
    pub fn start_loading(&mut self, now: Instant) {
        self.apply(TableAction::SetLoading(true), now);
        self.loading_until = Some(now + self.loading_delay);
    }

    /// Advances timers: finishes loading and expires notices.
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.loading_until
            && now >= until
        {
            self.loading_until = None;
            self.apply(TableAction::SetLoading(false), now);
            debug!("loading finished");
        }
        self.notices.expire(now);
    }

    fn page_len(&self) -> usize {
        self.table.view().page_rows().len()
    }

    /// Pulls cursors back into range after the page or columns changed.
    pub fn clamp_cursors(&mut self) {
        let rows = self.page_len();
        self.row_cursor = self.row_cursor.min(rows.saturating_sub(1));
        self.ratatui_state
            .select(if rows == 0 { None } else { Some(self.row_cursor) });

        let cols = self.table.visible_columns().len();
        self.column_cursor = self.column_cursor.min(cols.saturating_sub(1));
    }

    pub fn move_row(&mut self, delta: isize) {
        let rows = self.page_len();
        if rows == 0 {
            return;
        }
        self.row_cursor = self.row_cursor.saturating_add_signed(delta).min(rows - 1);
        self.clamp_cursors();
    }

    pub fn move_column(&mut self, delta: isize) {
        let cols = self.table.visible_columns().len();
        if cols == 0 {
            return;
        }
        self.column_cursor = self.column_cursor.saturating_add_signed(delta).min(cols - 1);
    }

    /// Id of the row under the cursor.
    pub fn focused_row(&self) -> Option<RowId> {
        self.table
            .view()
            .page_rows()
            .get(self.row_cursor)
            .map(|row| row.id())
    }

    /// Id of the column under the cursor.
    pub fn focused_column(&self) -> Option<String> {
        self.table
            .visible_columns()
            .get(self.column_cursor)
            .map(|c| c.id.clone())
    }

    /// `(id, header, visible)` for the column settings popup.
    pub fn column_entries(&self) -> Vec<(String, String, bool)> {
        let visibility = &self.table.state().visibility;
        self.table
            .columns()
            .iter()
            .filter(|c| c.hideable)
            .map(|c| (c.id.clone(), c.header.clone(), visibility.is_visible(&c.id)))
            .collect()
    }

    /// Returns true if any popup is open.
    pub fn any_popup_open(&self) -> bool {
        self.popup.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{mock_fleet, vessel_columns};

    fn state() -> AppState {
        let config = DashboardConfig::default();
        let table = DataTable::new(mock_fleet(), vessel_columns(), config.table.clone());
        AppState::new(table, &config, NaiveDate::from_ymd_opt(2024, 11, 15).unwrap())
    }

    #[test]
    fn loading_clears_after_delay() {
        let mut s = state();
        let now = Instant::now();
        s.start_loading(now);
        assert!(s.table.is_loading());
        s.tick(now + Duration::from_millis(50));
        assert!(s.table.is_loading());
        s.tick(now + Duration::from_millis(100));
        assert!(!s.table.is_loading());
    }

    #[test]
    fn select_all_notice_is_queued() {
        let mut s = state();
        s.apply(TableAction::ToggleAllOnPage(true), Instant::now());
        let messages: Vec<_> = s.notices.visible().map(|n| n.message.clone()).collect();
        assert_eq!(
            messages,
            vec!["Select All is limited up to 8 vessels. Please select manually.".to_string()]
        );
    }

    #[test]
    fn cursors_follow_page_and_columns() {
        let mut s = state();
        let now = Instant::now();
        s.move_row(100);
        assert_eq!(s.row_cursor, 9);
        s.apply(TableAction::LastPage, now);
        // 25 rows, last page holds 5.
        assert_eq!(s.row_cursor, 4);
        assert_eq!(s.focused_row(), Some(25));

        s.move_column(100);
        assert_eq!(s.column_cursor, 6);
        s.apply(TableAction::HideAllColumns, now);
        assert_eq!(s.column_cursor, 0);
        assert_eq!(s.focused_column().as_deref(), Some("vessels"));
    }

    #[test]
    fn empty_filter_result_has_no_focused_row() {
        let mut s = state();
        s.apply(TableAction::SetFilter("no such ship".into()), Instant::now());
        assert_eq!(s.focused_row(), None);
        assert_eq!(s.ratatui_state.selected(), None);
    }
}
