//! 输入步骤页面

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::components::error_message;
use crate::view::theme::Styles;

const PLACEHOLDER: &str = "Enter a city...";
/// 左右留白
const PADDING: u16 = 2;

/// 渲染输入页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1), // 输入文本
            Constraint::Length(1), // 下划线
            Constraint::Length(1),
            Constraint::Length(2), // 错误信息
            Constraint::Min(0),
        ])
        .split(area);

    let field = inset(rows[1]);
    let underline = inset(rows[2]);
    let error_area = inset(rows[4]);

    let query = app.controller.city_search_text();
    if query.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(PLACEHOLDER, Styles::placeholder())),
            field,
        );
    } else {
        let visible = visible_tail(query, usize::from(field.width.saturating_sub(1)));
        frame.render_widget(
            Paragraph::new(Span::styled(visible, Styles::input_text())),
            field,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(usize::from(underline.width)),
            Styles::underline(),
        ))),
        underline,
    );

    if let Some(message) = app.controller.error_message() {
        error_message::render(message, frame, error_area);
    }

    // 加载时不显示光标
    if !app.controller.is_loading() && field.width > 0 && field.height > 0 {
        let shown = visible_tail(query, usize::from(field.width.saturating_sub(1)));
        let offset = u16::try_from(shown.width()).unwrap_or(field.width);
        frame.set_cursor_position(Position::new(
            field.x + offset.min(field.width.saturating_sub(1)),
            field.y,
        ));
    }
}

/// 去掉左右留白
fn inset(area: Rect) -> Rect {
    let pad = PADDING.min(area.width / 2);
    Rect {
        x: area.x + pad,
        width: area.width - pad * 2,
        ..area
    }
}

/// 取文本末尾不超过 `max_width` 显示宽度的部分（光标总在末尾）
fn visible_tail(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
