//! 主布局：居中的卡片 + 底部状态栏

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    widgets::{Block, BorderType, Borders},
};
use weather_lookup_core::Step;

use crate::model::App;

use super::components;
use super::pages;
use super::theme::Styles;

/// 卡片宽度
const CARD_WIDTH: u16 = 48;
/// 卡片高度
const CARD_HEIGHT: u16 = 15;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Styles::background()), size);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_card(app, frame, centered(main_layout[0], CARD_WIDTH, CARD_HEIGHT));
    components::statusbar::render(app, frame, main_layout[1]);
}

/// 在 `area` 中居中放置指定大小的矩形（不超出 `area`）
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// 渲染卡片
fn render_card(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::card_border())
        .style(Styles::background());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 页面内容 + 步骤指示 + 操作按钮
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let content_area = rows[1];
    let indicator_area = rows[2];
    let button_area = rows[4];

    match app.controller.step() {
        Step::Input => pages::input::render(app, frame, content_area),
        Step::Result => pages::result::render(app, frame, content_area),
    }

    components::step_indicator::render(app.controller.step(), frame, indicator_area);
    components::button::render(app, frame, button_area);
}
