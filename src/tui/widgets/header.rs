//! Header bar and key-hint line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::{Styles, Theme};

/// Renders the header bar: title, month range and status.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::horizontal([
        Constraint::Length(24), // Title
        Constraint::Min(30),    // Month range
        Constraint::Length(44), // Status / loading
    ])
    .split(area);

    let title = Paragraph::new(" Vessel Earnings ").style(Styles::header());
    frame.render_widget(title, chunks[0]);

    let months = Line::from(vec![
        Span::styled("Month ", Styles::header()),
        Span::styled(state.months.label(), Styles::header().fg(Theme::ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(months).style(Styles::header()), chunks[1]);

    let status = if state.table.is_loading() {
        " Loading...".to_string()
    } else if let Some(msg) = &state.status_message {
        format!(" {}", msg)
    } else {
        format!(" {}", state.months.saved_label())
    };
    frame.render_widget(Paragraph::new(status).style(Styles::header()), chunks[2]);
}

/// Renders the bottom line of key hints.
pub fn render_key_hints(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints: &[(&str, &str)] = match state.input_mode {
        InputMode::Filter => &[("Enter", "apply"), ("Esc", "clear")],
        InputMode::Normal => &[
            ("q", "quit"),
            ("?", "help"),
            ("/", "filter"),
            ("s", "sort"),
            ("space", "select"),
            ("a", "select page"),
            ("n/p", "page"),
            ("c", "columns"),
            ("m", "months"),
        ],
    };
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, label)| {
            vec![
                Span::styled(format!(" {}", key), Styles::help_key()),
                Span::styled(format!(" {} ", label), Styles::help()),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
