//! Earnings trend chart.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};

use crate::fmt::format_currency;
use crate::models::trend::{SeriesKind, TrendChart};
use crate::tui::style::{Styles, Theme};

/// Renders the trend series as a line and scatter chart.
pub fn render_chart(frame: &mut Frame, area: Rect, chart: &TrendChart) {
    let points: Vec<Vec<(f64, f64)>> = chart.series.iter().map(|s| s.points()).collect();

    let datasets: Vec<Dataset> = chart
        .series
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            let (graph, marker, color) = match series.kind {
                SeriesKind::Line => (GraphType::Line, symbols::Marker::Braille, Theme::SERIES_LINE),
                SeriesKind::Scatter => (GraphType::Scatter, symbols::Marker::Dot, Theme::SERIES_SCATTER),
            };
            Dataset::default()
                .name(series.name)
                .graph_type(graph)
                .marker(marker)
                .style(Style::default().fg(color))
                .data(data)
        })
        .collect();

    let y_max = chart.y_max().max(1.0);
    let x_max = chart.categories.len().saturating_sub(1).max(1) as f64;

    let x_labels: Vec<Span> = chart.categories.iter().map(|c| Span::raw(*c)).collect();
    let y_labels = vec![
        Span::styled(format_currency(Some(0.0)), Styles::dim()),
        Span::styled(format_currency(Some(y_max)), Styles::dim()),
    ];

    let widget = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Earnings trend ")
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels).style(Styles::dim()))
        .y_axis(Axis::default().bounds([0.0, y_max]).labels(y_labels).style(Styles::dim()));

    frame.render_widget(widget, area);
}
