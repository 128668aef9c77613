//! Month-range picker popup: year header, 4x3 month grid, presets and
//! the trend date fields.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::month_range::{MONTH_NAMES, MonthRangePicker, PRESETS, TrendBound};
use crate::tui::input::MONTH_GRID_COLUMNS;
use crate::tui::style::Styles;

use super::centered;

const CELL_WIDTH: usize = 12;

pub fn render_month_picker(
    frame: &mut Frame,
    area: Rect,
    picker: &MonthRangePicker,
    cursor: usize,
    trend: Option<TrendBound>,
) {
    let popup_area = centered(area, 44, 19);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", picker.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Year
        Constraint::Length(4), // Grid
        Constraint::Length(3), // Presets
        Constraint::Length(3), // Trend dates
        Constraint::Min(1),    // Keys
    ])
    .split(inner);

    let next_style = if picker.can_next_year() {
        Style::default().fg(Color::Yellow)
    } else {
        Styles::dim()
    };
    let year = Line::from(vec![
        Span::styled(" [ ‹ ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!("{:^28}", picker.year()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" › ]", next_style),
    ]);
    frame.render_widget(Paragraph::new(year), chunks[0]);

    let grid: Vec<Line> = MONTH_NAMES
        .chunks(MONTH_GRID_COLUMNS)
        .enumerate()
        .map(|(row, names)| {
            let spans: Vec<Span> = names
                .iter()
                .enumerate()
                .map(|(col, name)| {
                    let index = row * MONTH_GRID_COLUMNS + col;
                    let label = format!("{:^width$}", &name[..3], width = CELL_WIDTH);
                    Span::styled(label, month_style(picker, index, index == cursor))
                })
                .collect();
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(grid), chunks[1]);

    let presets: Vec<Span> = PRESETS
        .iter()
        .enumerate()
        .flat_map(|(i, months)| {
            [
                Span::styled(format!(" {}", i + 1), Style::default().fg(Color::Yellow)),
                Span::styled(format!(" {}m", months), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    let preset_lines = vec![
        Line::from(Span::styled("Last n months:", Style::default().fg(Color::DarkGray))),
        Line::from(presets),
    ];
    frame.render_widget(Paragraph::new(preset_lines), chunks[2]);

    let (start, end) = picker.saved();
    let field = |label: &'static str, date: chrono::NaiveDate, bound: TrendBound| {
        let style = if trend == Some(bound) {
            Styles::range_end()
        } else {
            Styles::default()
        };
        [
            Span::styled(format!(" {} ", label), Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {} ", date.format("%d-%m-%Y")), style),
        ]
    };
    let mut dates: Vec<Span> = Vec::new();
    dates.extend(field("From", start, TrendBound::Start));
    dates.extend(field("To", end, TrendBound::End));
    let trend_lines = vec![
        Line::from(Span::styled(
            "Show data trend for:",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(dates),
    ];
    frame.render_widget(Paragraph::new(trend_lines), chunks[3]);

    let keys = vec![
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::styled(" dates (←→ day, ↑↓ week)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" pick  ", Style::default().fg(Color::DarkGray)),
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::styled(" reset  ", Style::default().fg(Color::DarkGray)),
            Span::styled("s", Style::default().fg(Color::Yellow)),
            Span::styled(" save  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" close", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(Paragraph::new(keys), chunks[4]);
}

fn month_style(picker: &MonthRangePicker, index: usize, focused: bool) -> Style {
    let base = if picker.is_future_month(index) {
        Styles::dim()
    } else if picker.is_start(index) || picker.is_end(index) {
        Styles::range_end()
    } else if picker.is_in_range(index) {
        Styles::in_range()
    } else {
        Styles::default()
    };
    if focused {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}
