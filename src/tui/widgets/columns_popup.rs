//! Column visibility popup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::centered;

/// Renders the "Show Columns" checklist. `entries` are `(id, header, visible)`.
pub fn render_columns_popup(
    frame: &mut Frame,
    area: Rect,
    entries: &[(String, String, bool)],
    cursor: usize,
) {
    let height = entries.len() as u16 + 6;
    let popup_area = centered(area, 40, height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Show Columns ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(inner);

    let lines: Vec<Line> = entries
        .iter()
        .enumerate()
        .map(|(i, (_, header, visible))| {
            let mark = if *visible { "[x]" } else { "[ ]" };
            let style = if i == cursor {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!(" {} {}", mark, header), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let hints = vec![
        Line::from(vec![
            Span::styled("a", Style::default().fg(Color::Yellow)),
            Span::styled(" Select All  ", Style::default().fg(Color::DarkGray)),
            Span::styled("d", Style::default().fg(Color::Yellow)),
            Span::styled(" Deselect All", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("space", Style::default().fg(Color::Yellow)),
            Span::styled(" toggle  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" close", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(hints), chunks[1]);
}
