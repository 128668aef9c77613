//! TUI widgets for vesselboard.

mod chart;
mod columns_popup;
mod data_table;
mod filter_bar;
mod footer;
mod header;
mod help;
mod month_picker;
mod quit_confirm;
mod selection_banner;
mod toast;

use ratatui::layout::Rect;

pub use chart::render_chart;
pub use columns_popup::render_columns_popup;
pub use data_table::render_data_table;
pub use filter_bar::render_filter_bar;
pub use footer::render_footer;
pub use header::{render_header, render_key_hints};
pub use help::render_help;
pub use month_picker::render_month_picker;
pub use quit_confirm::render_quit_confirm;
pub use selection_banner::render_selection_banner;
pub use toast::render_toasts;

/// Centers a popup of the given size inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
