//! 错误提示

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Wrap},
};

use crate::view::theme::Styles;

pub fn render(message: &str, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(message)
        .style(Styles::error())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
