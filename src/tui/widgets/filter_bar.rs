//! Filter input line.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::InputMode;
use crate::tui::style::Styles;
use crate::view::FilterBarView;

/// Renders the filter bar. While typing, the live input and a cursor are shown.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, bar: &FilterBarView, mode: InputMode, input: &str) {
    let line = match mode {
        InputMode::Filter => Line::from(vec![
            Span::styled(" / ", Styles::help_key()),
            Span::styled(format!("{}_", input), Styles::filter_input()),
        ]),
        InputMode::Normal if bar.value.is_empty() => Line::from(vec![
            Span::styled(" / ", Styles::dim()),
            Span::styled(bar.placeholder.clone(), Styles::dim()),
        ]),
        InputMode::Normal => Line::from(vec![
            Span::styled(" / ", Styles::dim()),
            Span::styled(bar.value.clone(), Styles::filter_input()),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
