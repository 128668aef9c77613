//! UI-agnostic view model for the data table.
//!
//! [`TableViewModel::build`] turns a [`DataTable`] into plain presentation
//! data. The TUI maps it to ratatui widgets; [`render_plain`] prints it for
//! the non-interactive dump mode.

use crate::fmt::truncate;
use crate::table::{CheckState, DataTable, RowId, SortDirection, TableRow};

/// Body text when no row survives filtering.
pub const EMPTY_MESSAGE: &str = "No results.";
/// Body text while rows are being fetched.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Filter input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarView {
    pub column_id: String,
    pub value: String,
    pub placeholder: String,
}

/// Summary shown while at least one row is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionBannerView {
    pub count: usize,
    pub max: usize,
}

impl SelectionBannerView {
    /// `"3 / 8 Rows Selected"`
    pub fn text(&self) -> String {
        format!("{} / {} Rows Selected", self.count, self.max)
    }
}

/// One data column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub id: String,
    pub label: String,
    pub width: Option<u16>,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
}

impl HeaderCell {
    /// Sort indicator: `▲`, `▼`, or `↕` on an unsorted sortable column.
    pub fn indicator(&self) -> &'static str {
        match (self.sortable, self.sort) {
            (_, Some(SortDirection::Ascending)) => "▲",
            (_, Some(SortDirection::Descending)) => "▼",
            (true, None) => "↕",
            (false, None) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Select-all checkbox state, `None` when row selection is disabled.
    pub select_all: Option<CheckState>,
    /// Whether the expand column is drawn.
    pub expand: bool,
    pub cells: Vec<HeaderCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RowId,
    /// `None` when row selection is disabled.
    pub selected: Option<bool>,
    pub cells: Vec<String>,
}

/// The three mutually exclusive body states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Loading { colspan: usize },
    Empty { colspan: usize, message: String },
    Rows(Vec<RowView>),
}

/// Pagination controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub page_label: String,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub total: usize,
    pub can_first: bool,
    pub can_previous: bool,
    pub can_next: bool,
    pub can_last: bool,
}

impl FooterView {
    /// `"View 10 Rows per page"`
    pub fn page_size_label(&self) -> String {
        format!("View {} Rows per page", self.page_size)
    }
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewModel {
    pub filter_bar: Option<FilterBarView>,
    pub selection_banner: Option<SelectionBannerView>,
    pub header: HeaderView,
    pub body: BodyView,
    pub footer: Option<FooterView>,
    /// Visible data columns plus checkbox and expand columns.
    pub colspan: usize,
}

impl TableViewModel {
    pub fn build<T: TableRow>(table: &DataTable<T>) -> Self {
        let options = table.options();
        let state = table.state();
        let view = table.view();
        let columns = table.visible_columns();
        let colspan = columns.len() + options.extra_columns();
        let page_ids = view.page_ids();

        let filter_bar = options.show_filter_bar.then(|| FilterBarView {
            column_id: state.filter.column_id().to_string(),
            value: state.filter.value().to_string(),
            placeholder: state.filter.placeholder(),
        });

        let selection_banner = (options.show_selection_banner
            && options.enable_row_selection
            && !state.selection.is_empty())
        .then(|| SelectionBannerView {
            count: state.selection.count(),
            max: state.selection.max(),
        });

        let header = HeaderView {
            select_all: options
                .enable_row_selection
                .then(|| state.selection.page_check_state(&page_ids)),
            expand: options.enable_expand,
            cells: columns
                .iter()
                .map(|c| HeaderCell {
                    id: c.id.clone(),
                    label: c.header.clone(),
                    width: c.width,
                    sortable: c.sortable,
                    sort: state.sort.direction_for(&c.id),
                })
                .collect(),
        };

        let body = if table.is_loading() {
            BodyView::Loading { colspan }
        } else if view.total() == 0 {
            BodyView::Empty {
                colspan,
                message: EMPTY_MESSAGE.to_string(),
            }
        } else {
            BodyView::Rows(
                view.page_rows()
                    .iter()
                    .map(|row| RowView {
                        id: row.id(),
                        selected: options
                            .enable_row_selection
                            .then(|| state.selection.is_selected(row.id())),
                        cells: columns.iter().map(|c| c.render(row)).collect(),
                    })
                    .collect(),
            )
        };

        let footer = options.show_footer.then(|| {
            let can_previous = state.pagination.can_previous();
            let can_next = state.pagination.can_next(view.total());
            FooterView {
                page_label: state.pagination.label(view.total()),
                page_size: state.pagination.page_size(),
                page_size_options: state.pagination.options().to_vec(),
                total: view.total(),
                can_first: can_previous,
                can_previous,
                can_next,
                can_last: can_next,
            }
        });

        Self {
            filter_bar,
            selection_banner,
            header,
            body,
            footer,
            colspan,
        }
    }
}

const DEFAULT_PLAIN_WIDTH: usize = 18;

/// Renders the view model as plain text, one line per row.
pub fn render_plain(model: &TableViewModel) -> String {
    let mut out = Vec::new();

    if let Some(bar) = &model.filter_bar {
        let shown = if bar.value.is_empty() { &bar.placeholder } else { &bar.value };
        out.push(format!("[{}]", shown));
    }
    if let Some(banner) = &model.selection_banner {
        out.push(banner.text());
    }

    let widths: Vec<usize> = model
        .header
        .cells
        .iter()
        .map(|c| c.width.map_or(DEFAULT_PLAIN_WIDTH, usize::from))
        .collect();

    let mut header = Vec::new();
    if let Some(check) = model.header.select_all {
        header.push(checkbox(check).to_string());
    }
    if model.header.expand {
        header.push(" ".to_string());
    }
    for (cell, &w) in model.header.cells.iter().zip(&widths) {
        let label = format!("{} {}", cell.label, cell.indicator());
        header.push(format!("{:<w$}", truncate(label.trim_end(), w)));
    }
    out.push(header.join(" ").trim_end().to_string());

    match &model.body {
        BodyView::Loading { .. } => out.push(LOADING_MESSAGE.to_string()),
        BodyView::Empty { message, .. } => out.push(message.clone()),
        BodyView::Rows(rows) => {
            for row in rows {
                let mut line = Vec::new();
                if let Some(selected) = row.selected {
                    line.push(if selected { "[x]" } else { "[ ]" }.to_string());
                }
                if model.header.expand {
                    line.push(">".to_string());
                }
                for (text, &w) in row.cells.iter().zip(&widths) {
                    line.push(format!("{:<w$}", truncate(text, w)));
                }
                out.push(line.join(" ").trim_end().to_string());
            }
        }
    }

    if let Some(footer) = &model.footer {
        out.push(format!(
            "{}  |  {}  |  {} rows",
            footer.page_size_label(),
            footer.page_label,
            footer.total
        ));
    }

    out.join("\n")
}

fn checkbox(state: CheckState) -> &'static str {
    match state {
        CheckState::Unchecked => "[ ]",
        CheckState::Indeterminate => "[-]",
        CheckState::Checked => "[x]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableOptions;
    use crate::table::{CellValue, ColumnDef, TableAction};

    struct Row(u64);

    impl TableRow for Row {
        fn id(&self) -> RowId {
            self.0
        }
    }

    fn columns() -> Vec<ColumnDef<Row>> {
        vec![
            ColumnDef::new("vessels", "Vessels", |r: &Row| CellValue::Text(format!("Ship {}", r.0))),
            ColumnDef::new("age", "Age", |r: &Row| CellValue::Integer(r.0 as i64)),
            ColumnDef::new("earnings", "Earnings", |_: &Row| CellValue::Missing).not_hideable(),
        ]
    }

    fn table(n: u64, options: TableOptions) -> DataTable<Row> {
        DataTable::new((1..=n).map(Row).collect(), columns(), options)
    }

    #[test]
    fn empty_body_spans_visible_and_extra_columns() {
        let mut t = table(0, TableOptions::default());
        assert_eq!(
            t.view_model().body,
            BodyView::Empty {
                colspan: 5,
                message: "No results.".into()
            }
        );

        t.dispatch(TableAction::ToggleColumn {
            id: "age".into(),
            visible: false,
        });
        let options = TableOptions {
            enable_expand: false,
            ..TableOptions::default()
        };
        let mut narrow = table(0, options);
        narrow.dispatch(TableAction::ToggleColumn {
            id: "age".into(),
            visible: false,
        });
        assert_eq!(t.view_model().colspan, 4);
        assert_eq!(narrow.view_model().colspan, 3);
    }

    #[test]
    fn loading_overrides_rows() {
        let mut t = table(12, TableOptions::default());
        t.dispatch(TableAction::SetLoading(true));
        assert_eq!(t.view_model().body, BodyView::Loading { colspan: 5 });
        t.dispatch(TableAction::SetLoading(false));
        assert!(matches!(t.view_model().body, BodyView::Rows(rows) if rows.len() == 10));
    }

    #[test]
    fn banner_only_when_selected() {
        let mut t = table(3, TableOptions::default());
        assert!(t.view_model().selection_banner.is_none());
        t.dispatch(TableAction::ToggleRow { id: 2, selected: true });
        let vm = t.view_model();
        assert_eq!(vm.selection_banner.map(|b| b.text()), Some("1 / 8 Rows Selected".to_string()));
        assert_eq!(vm.header.select_all, Some(CheckState::Indeterminate));
    }

    #[test]
    fn header_indicators() {
        let mut t = table(3, TableOptions::default());
        t.dispatch(TableAction::ToggleSort("age".into()));
        let vm = t.view_model();
        assert_eq!(vm.header.cells[0].indicator(), "↕");
        assert_eq!(vm.header.cells[1].indicator(), "▲");
        t.dispatch(TableAction::ToggleSort("age".into()));
        assert_eq!(t.view_model().header.cells[1].indicator(), "▼");
    }

    #[test]
    fn footer_controls() {
        let mut t = table(25, TableOptions::default());
        let footer = t.view_model().footer.unwrap();
        assert_eq!(footer.page_label, "Page 1 of 3");
        assert!(!footer.can_previous && !footer.can_first);
        assert!(footer.can_next && footer.can_last);
        assert_eq!(footer.page_size_label(), "View 10 Rows per page");

        t.dispatch(TableAction::LastPage);
        let footer = t.view_model().footer.unwrap();
        assert_eq!(footer.page_label, "Page 3 of 3");
        assert!(!footer.can_next);

        let empty = table(0, TableOptions::default());
        assert_eq!(empty.view_model().footer.unwrap().page_label, "Page 1 of 1");
    }

    #[test]
    fn sub_views_follow_flags() {
        let options = TableOptions {
            show_filter_bar: false,
            show_footer: false,
            enable_row_selection: false,
            ..TableOptions::default()
        };
        let t = table(3, options);
        let vm = t.view_model();
        assert!(vm.filter_bar.is_none());
        assert!(vm.footer.is_none());
        assert!(vm.header.select_all.is_none());
        assert_eq!(vm.colspan, 4);
    }

    #[test]
    fn plain_rendering() {
        let mut t = table(2, TableOptions::default());
        t.dispatch(TableAction::ToggleRow { id: 1, selected: true });
        let text = render_plain(&t.view_model());
        assert!(text.starts_with("[Filter vessels...]"));
        assert!(text.contains("1 / 8 Rows Selected"));
        assert!(text.contains("[x] > Ship 1"));
        assert!(text.contains("--"));
        assert!(text.ends_with("Page 1 of 1  |  2 rows"));

        let empty = table(0, TableOptions::default());
        assert!(render_plain(&empty.view_model()).contains("No results."));
    }
}
