//! Vessel table rendered from the view model.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::fmt::{PLACEHOLDER, truncate};
use crate::table::CheckState;
use crate::tui::style::Styles;
use crate::view::{BodyView, HeaderView, LOADING_MESSAGE, TableViewModel};

const CHECKBOX_WIDTH: u16 = 3;
const EXPAND_WIDTH: u16 = 2;
const DEFAULT_COLUMN_WIDTH: u16 = 16;

/// Renders the table header and the current body state.
pub fn render_data_table(
    frame: &mut Frame,
    area: Rect,
    model: &TableViewModel,
    focused_column: Option<&str>,
    state: &mut TableState,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::dim());

    let widths = column_widths(&model.header);
    let header = header_row(&model.header, focused_column);

    let rows: Vec<Row> = match &model.body {
        BodyView::Loading { .. } => {
            render_single_message(frame, area, block, header, &widths, LOADING_MESSAGE, Styles::dim());
            return;
        }
        BodyView::Empty { message, .. } => {
            render_single_message(frame, area, block, header, &widths, message, Styles::dim());
            return;
        }
        BodyView::Rows(rows) => rows
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(model.colspan);
                if let Some(selected) = row.selected {
                    cells.push(checkbox_cell(selected));
                }
                if model.header.expand {
                    cells.push(Cell::from(Span::styled(">", Styles::dim())));
                }
                for (text, width) in row.cells.iter().zip(data_widths(&model.header)) {
                    cells.push(value_cell(text, width));
                }
                Row::new(cells)
            })
            .collect(),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Styles::selected());
    frame.render_stateful_widget(table, area, state);
}

/// Loading and empty states take the header plus one message spanning every column.
fn render_single_message(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    header: Row,
    widths: &[Constraint],
    message: &str,
    style: Style,
) {
    let inner = block.inner(area);
    let table = Table::new(Vec::<Row>::new(), widths.to_vec()).header(header);
    frame.render_widget(block, area);
    frame.render_widget(table, inner);

    if inner.height > 1 {
        let body = Rect::new(inner.x, inner.y + 1, inner.width, 1);
        let text = Paragraph::new(message.to_string())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(text, body);
    }
}

fn column_widths(header: &HeaderView) -> Vec<Constraint> {
    let mut widths = Vec::new();
    if header.select_all.is_some() {
        widths.push(Constraint::Length(CHECKBOX_WIDTH));
    }
    if header.expand {
        widths.push(Constraint::Length(EXPAND_WIDTH));
    }
    widths.extend(data_widths(header).map(Constraint::Length));
    widths
}

fn data_widths(header: &HeaderView) -> impl Iterator<Item = u16> + '_ {
    header
        .cells
        .iter()
        .map(|c| c.width.unwrap_or(DEFAULT_COLUMN_WIDTH))
}

fn header_row<'a>(header: &'a HeaderView, focused_column: Option<&str>) -> Row<'a> {
    let mut cells = Vec::new();
    if let Some(check) = header.select_all {
        let glyph = match check {
            CheckState::Checked => "[x]",
            CheckState::Indeterminate => "[-]",
            CheckState::Unchecked => "[ ]",
        };
        cells.push(Cell::from(glyph));
    }
    if header.expand {
        cells.push(Cell::from(""));
    }
    for cell in &header.cells {
        let label = if cell.sortable {
            format!("{} {}", cell.label, cell.indicator())
        } else {
            cell.label.clone()
        };
        let style = if focused_column == Some(cell.id.as_str()) {
            Styles::focused_header()
        } else {
            Styles::table_header()
        };
        cells.push(Cell::from(Span::styled(label, style)));
    }
    Row::new(cells).style(Styles::table_header())
}

fn checkbox_cell(selected: bool) -> Cell<'static> {
    if selected {
        Cell::from(Span::styled("[x]", Styles::checked()))
    } else {
        Cell::from("[ ]")
    }
}

fn value_cell(text: &str, width: u16) -> Cell<'static> {
    let shown = truncate(text, width as usize);
    let style = if text == PLACEHOLDER {
        Styles::missing()
    } else if text.starts_with("-$") {
        Styles::negative()
    } else {
        Styles::default()
    };
    Cell::from(Span::styled(shown, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableOptions;
    use crate::models::{mock_fleet, vessel_columns};
    use crate::table::DataTable;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(table: &DataTable<crate::models::Vessel>) -> String {
        let model = table.view_model();
        let mut terminal = Terminal::new(TestBackend::new(160, 20)).unwrap();
        let mut state = TableState::default();
        terminal
            .draw(|f| render_data_table(f, f.area(), &model, None, &mut state))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|line| line.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_headers_and_rows() {
        let table = DataTable::new(mock_fleet(), vessel_columns(), TableOptions::default());
        let screen = draw(&table);
        assert!(screen.contains("Vessels"));
        assert!(screen.contains("[ ]"));
    }

    #[test]
    fn loading_replaces_rows() {
        let mut table = DataTable::new(mock_fleet(), vessel_columns(), TableOptions::default());
        table.dispatch(crate::table::TableAction::SetLoading(true));
        let screen = draw(&table);
        assert!(screen.contains(LOADING_MESSAGE));
    }

    #[test]
    fn empty_shows_message() {
        let table = DataTable::new(Vec::new(), vessel_columns(), TableOptions::default());
        let screen = draw(&table);
        assert!(screen.contains("No results."));
    }

    #[test]
    fn cell_styles() {
        assert_eq!(value_cell("--", 10), Cell::from(Span::styled("--", Styles::missing())));
        assert_eq!(
            value_cell("-$1,500.50", 12),
            Cell::from(Span::styled("-$1,500.50", Styles::negative()))
        );
    }
}
