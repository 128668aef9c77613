//! Input handling and keybindings.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::month_range::{PRESETS, TrendBound};
use crate::table::TableAction;

use super::state::{AppState, InputMode, PopupState};

/// Months per row on the month-picker grid.
pub const MONTH_GRID_COLUMNS: usize = 3;

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Refetch rows (`R`).
    Reload,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> KeyAction {
    if is_ctrl_c(&key) {
        return KeyAction::Quit;
    }
    match state.popup.clone() {
        PopupState::QuitConfirm => return handle_quit_confirm(state, key),
        PopupState::Help { scroll } => return handle_help(state, key, scroll),
        PopupState::Columns { cursor } => return handle_columns(state, key, cursor, now),
        PopupState::MonthPicker { cursor, trend } => {
            return handle_month_picker(state, key, cursor, trend);
        }
        PopupState::None => {}
    }
    match state.input_mode {
        InputMode::Normal => handle_normal_mode(state, key, now),
        InputMode::Filter => handle_filter_mode(state, key, now),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent, scroll: usize) -> KeyAction {
    state.popup = match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => PopupState::None,
        KeyCode::Up | KeyCode::Char('k') => PopupState::Help {
            scroll: scroll.saturating_sub(1),
        },
        // Clamped during render
        KeyCode::Down | KeyCode::Char('j') => PopupState::Help {
            scroll: scroll.saturating_add(1),
        },
        _ => PopupState::Help { scroll },
    };
    KeyAction::None
}

fn handle_columns(state: &mut AppState, key: KeyEvent, cursor: usize, now: Instant) -> KeyAction {
    let entries = state.column_entries();
    let last = entries.len().saturating_sub(1);
    let mut cursor = cursor.min(last);

    match key.code {
        KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
            return KeyAction::None;
        }
        KeyCode::Up | KeyCode::Char('k') => cursor = cursor.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => cursor = (cursor + 1).min(last),
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some((id, _, _)) = entries.get(cursor) {
                state.apply(TableAction::FlipColumn(id.clone()), now);
            }
        }
        KeyCode::Char('a') => state.apply(TableAction::ShowAllColumns, now),
        KeyCode::Char('d') => state.apply(TableAction::HideAllColumns, now),
        _ => {}
    }
    state.popup = PopupState::Columns { cursor };
    KeyAction::None
}

fn handle_month_picker(
    state: &mut AppState,
    key: KeyEvent,
    cursor: usize,
    trend: Option<TrendBound>,
) -> KeyAction {
    let mut cursor = cursor.min(11);
    let mut trend = trend;

    // Tab walks grid -> trend start -> trend end -> grid
    if key.code == KeyCode::Tab {
        trend = match trend {
            None => Some(TrendBound::Start),
            Some(TrendBound::Start) => Some(TrendBound::End),
            Some(TrendBound::End) => None,
        };
        state.popup = PopupState::MonthPicker { cursor, trend };
        return KeyAction::None;
    }
    if let Some(bound) = trend {
        let days = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(-1),
            KeyCode::Right | KeyCode::Char('l') => Some(1),
            KeyCode::Up | KeyCode::Char('k') => Some(-7),
            KeyCode::Down | KeyCode::Char('j') => Some(7),
            _ => None,
        };
        if let Some(days) = days {
            state.months.shift_trend(bound, days);
            state.popup = PopupState::MonthPicker { cursor, trend };
            return KeyAction::None;
        }
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
            return KeyAction::None;
        }
        KeyCode::Left | KeyCode::Char('h') => cursor = cursor.saturating_sub(1),
        KeyCode::Right | KeyCode::Char('l') => cursor = (cursor + 1).min(11),
        KeyCode::Up | KeyCode::Char('k') => cursor = cursor.saturating_sub(MONTH_GRID_COLUMNS),
        KeyCode::Down | KeyCode::Char('j') => cursor = (cursor + MONTH_GRID_COLUMNS).min(11),
        KeyCode::Char('[') | KeyCode::PageUp => state.months.previous_year(),
        KeyCode::Char(']') | KeyCode::PageDown => state.months.next_year(),
        KeyCode::Char(' ') | KeyCode::Enter => state.months.click_month(cursor),
        KeyCode::Char('r') => state.months.reset(),
        KeyCode::Char('s') => {
            if let Some((start, end)) = state.months.save() {
                state.status_message = Some(format!(
                    "Showing {} - {}",
                    start.format("%d-%m-%Y"),
                    end.format("%d-%m-%Y")
                ));
                state.popup = PopupState::None;
                return KeyAction::None;
            }
            state.status_message = Some("Pick an end month before saving".to_string());
        }
        KeyCode::Char(c @ '1'..='6') => {
            let idx = c as usize - '1' as usize;
            if let Some(&months) = PRESETS.get(idx) {
                state.months.apply_preset(months);
            }
        }
        _ => {}
    }
    state.popup = PopupState::MonthPicker { cursor, trend };
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal_mode(state: &mut AppState, key: KeyEvent, now: Instant) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
        }
        KeyCode::Char('?') => state.popup = PopupState::Help { scroll: 0 },
        KeyCode::Char('c') => state.popup = PopupState::Columns { cursor: 0 },
        KeyCode::Char('m') => {
            state.popup = PopupState::MonthPicker {
                cursor: 0,
                trend: None,
            }
        }
        KeyCode::Char('R') => return KeyAction::Reload,

        // Cursor
        KeyCode::Up | KeyCode::Char('k') => state.move_row(-1),
        KeyCode::Down | KeyCode::Char('j') => state.move_row(1),
        KeyCode::Left | KeyCode::Char('h') => state.move_column(-1),
        KeyCode::Right | KeyCode::Char('l') => state.move_column(1),

        // Sort / filter
        KeyCode::Char('s') => {
            if let Some(column) = state.focused_column() {
                state.apply(TableAction::ToggleSort(column), now);
            }
        }
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Filter;
            state.filter_input = state.table.state().filter.value().to_string();
        }

        // Selection
        KeyCode::Char(' ') => {
            if let Some(id) = state.focused_row() {
                let selected = state.table.state().selection.is_selected(id);
                state.apply(TableAction::ToggleRow { id, selected: !selected }, now);
            }
        }
        KeyCode::Char('a') => {
            let page_ids = state.table.view().page_ids();
            let all = !page_ids.is_empty()
                && page_ids
                    .iter()
                    .all(|id| state.table.state().selection.is_selected(*id));
            state.apply(TableAction::ToggleAllOnPage(!all), now);
        }
        KeyCode::Char('x') => state.apply(TableAction::ClearSelection, now),

        // Pagination
        KeyCode::Char('n') | KeyCode::PageDown => state.apply(TableAction::NextPage, now),
        KeyCode::Char('p') | KeyCode::PageUp => state.apply(TableAction::PreviousPage, now),
        KeyCode::Char('g') | KeyCode::Home => state.apply(TableAction::FirstPage, now),
        KeyCode::Char('G') | KeyCode::End => state.apply(TableAction::LastPage, now),
        KeyCode::Char('+') | KeyCode::Char('=') => step_page_size(state, 1, now),
        KeyCode::Char('-') => step_page_size(state, -1, now),

        KeyCode::Esc => state.status_message = None,
        _ => {}
    }
    KeyAction::None
}

/// Moves to the neighbouring page size option.
fn step_page_size(state: &mut AppState, step: isize, now: Instant) {
    if let Some(size) = state.table.state().pagination.adjacent_size(step) {
        state.apply(TableAction::SetPageSize(size), now);
    }
}

/// Handles keys while typing a filter. The filter applies as you type.
fn handle_filter_mode(state: &mut AppState, key: KeyEvent, now: Instant) -> KeyAction {
    match key.code {
        KeyCode::Esc => {
            // Cancel filter
            state.input_mode = InputMode::Normal;
            state.filter_input.clear();
            state.apply(TableAction::SetFilter(String::new()), now);
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            state.filter_input.pop();
            let text = state.filter_input.clone();
            state.apply(TableAction::SetFilter(text), now);
        }
        KeyCode::Char(c) => {
            state.filter_input.push(c);
            let text = state.filter_input.clone();
            state.apply(TableAction::SetFilter(text), now);
        }
        _ => {}
    }
    KeyAction::None
}
