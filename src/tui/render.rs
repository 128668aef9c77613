//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::state::{AppState, PopupState};
use super::widgets::{
    render_chart, render_columns_popup, render_data_table, render_filter_bar, render_footer,
    render_header, render_help, render_key_hints, render_month_picker, render_quit_confirm,
    render_selection_banner, render_toasts,
};

const CHART_HEIGHT: u16 = 10;

/// Main render function. Everything is drawn from the current state only.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let model = state.table.view_model();

    let chunks = Layout::vertical([
        Constraint::Length(1),            // Header
        Constraint::Length(CHART_HEIGHT), // Trend chart
        Constraint::Length(u16::from(model.filter_bar.is_some())),
        Constraint::Length(u16::from(model.selection_banner.is_some())),
        Constraint::Min(5),                                    // Table
        Constraint::Length(u16::from(model.footer.is_some())), // Footer
        Constraint::Length(1),                                 // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_chart(frame, chunks[1], &state.chart);

    if let Some(bar) = &model.filter_bar {
        render_filter_bar(frame, chunks[2], bar, state.input_mode, &state.filter_input);
    }
    if let Some(banner) = &model.selection_banner {
        render_selection_banner(frame, chunks[3], banner);
    }

    let focused = state.focused_column();
    render_data_table(
        frame,
        chunks[4],
        &model,
        focused.as_deref(),
        &mut state.ratatui_state,
    );

    if let Some(footer) = &model.footer {
        render_footer(frame, chunks[5], footer);
    }
    render_key_hints(frame, chunks[6], state);

    // Popups overlay everything; only one is open at a time
    if let PopupState::Help { scroll } = &mut state.popup {
        render_help(frame, area, scroll);
    }
    match state.popup {
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::Columns { cursor } => {
            render_columns_popup(frame, area, &state.column_entries(), cursor);
        }
        PopupState::MonthPicker { cursor, trend } => {
            render_month_picker(frame, area, &state.months, cursor, trend);
        }
        PopupState::None | PopupState::Help { .. } => {}
    }

    render_toasts(frame, area, &state.notices);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use chrono::NaiveDate;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::DashboardConfig;
    use crate::models::{mock_fleet, vessel_columns};
    use crate::table::{DataTable, TableAction};

    fn state() -> AppState {
        let config = DashboardConfig::default();
        let table = DataTable::new(mock_fleet(), vessel_columns(), config.table.clone());
        AppState::new(table, &config, NaiveDate::from_ymd_opt(2024, 11, 15).unwrap())
    }

    fn screen(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_dashboard() {
        let mut s = state();
        let out = screen(&mut s);
        assert!(out.contains("Vessel Earnings"));
        assert!(out.contains("Page 1 of 3"));
        assert!(out.contains("View 10 Rows per page"));
        assert!(!out.contains("Rows Selected"));
    }

    #[test]
    fn banner_and_popups() {
        let mut s = state();
        s.apply(TableAction::ToggleRow { id: 1, selected: true }, Instant::now());
        assert!(screen(&mut s).contains("1 / 8 Rows Selected"));

        s.popup = PopupState::Columns { cursor: 0 };
        assert!(screen(&mut s).contains("Show Columns"));

        s.popup = PopupState::QuitConfirm;
        assert!(screen(&mut s).contains("Exit vesselboard"));
    }

    #[test]
    fn month_picker_shows_trend_dates() {
        let mut s = state();
        s.popup = PopupState::MonthPicker {
            cursor: 0,
            trend: Some(crate::month_range::TrendBound::Start),
        };
        let out = screen(&mut s);
        assert!(out.contains("Show data trend for:"));
        assert!(out.contains("01-06-2024"));
        assert!(out.contains("30-11-2024"));
    }

    #[test]
    fn help_scroll_is_clamped() {
        let mut s = state();
        s.popup = PopupState::Help { scroll: 999 };
        screen(&mut s);
        let PopupState::Help { scroll } = s.popup else {
            panic!("help closed");
        };
        assert!(scroll < 999);
    }
}
