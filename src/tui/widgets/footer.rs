//! Pagination controls under the table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;
use crate::view::FooterView;

pub fn render_footer(frame: &mut Frame, area: Rect, footer: &FooterView) {
    let chunks = Layout::horizontal([Constraint::Min(30), Constraint::Length(48)]).split(area);

    let options = footer
        .page_size_options
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("/");
    let size = Line::from(vec![
        Span::styled(format!(" {}", footer.page_size_label()), Styles::default()),
        Span::styled(format!("  (+/- {})", options), Styles::dim()),
    ]);
    frame.render_widget(Paragraph::new(size), chunks[0]);

    let nav = Line::from(vec![
        control("«", footer.can_first),
        control("‹", footer.can_previous),
        Span::styled(format!(" {} ", footer.page_label), Styles::default()),
        control("›", footer.can_next),
        control("»", footer.can_last),
    ]);
    frame.render_widget(Paragraph::new(nav).right_aligned(), chunks[1]);
}

/// Navigation glyph, dimmed when the move is unavailable.
fn control(glyph: &'static str, enabled: bool) -> Span<'static> {
    let style: Style = if enabled { Styles::accent() } else { Styles::dim() };
    Span::styled(format!(" {} ", glyph), style)
}
