//! "N / MAX Rows Selected" strip.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use crate::tui::style::Styles;
use crate::view::SelectionBannerView;

pub fn render_selection_banner(frame: &mut Frame, area: Rect, banner: &SelectionBannerView) {
    let text = format!(" {}   x clear ", banner.text());
    frame.render_widget(Paragraph::new(text).style(Styles::banner()), area);
}
