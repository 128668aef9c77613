//! Help popup widget with key bindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered;

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    // 60% width, 80% height, clamped to 40-80 x 10-30
    let popup_area = centered(
        area,
        (area.width * 60 / 100).clamp(40, 80),
        (area.height * 80 / 100).clamp(10, 30),
    );

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Vesselboard Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let visible_height = chunks[0].height as usize;

    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close, ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" to scroll", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().fg(Color::Cyan)))
}

fn binding(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<12}", key), Style::default().fg(Color::Yellow)),
        Span::raw(desc),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Navigation"),
        binding("↑↓ / j k", "Move row cursor"),
        binding("←→ / h l", "Move column cursor"),
        binding("n / p", "Next / previous page"),
        binding("g / G", "First / last page"),
        binding("+ / -", "Next / previous page size"),
        Line::from(""),
        section("Table"),
        binding("s", "Cycle sort on focused column (asc, desc, none)"),
        binding("/", "Filter by vessel name, Esc clears"),
        binding("space", "Select or deselect focused row"),
        binding("a", "Select or deselect every row on the page"),
        binding("x", "Clear selection"),
        binding("c", "Show / hide columns"),
        Line::from(""),
        section("Dashboard"),
        binding("m", "Pick month range"),
        binding("R", "Reload data"),
        binding("?", "Toggle this help"),
        binding("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Selection is capped; a select-all that would pass the cap is dropped with a notice.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Missing values show as -- and sort last in both directions.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
