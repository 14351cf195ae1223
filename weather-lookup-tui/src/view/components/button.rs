//! 卡片右下角的操作按钮

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use weather_lookup_core::{Step, utils::text::is_submittable};

use crate::model::App;
use crate::view::components::spinner;
use crate::view::theme::Styles;

/// 渲染按钮
///
/// 输入步骤只有在查询可提交时才显示 `Next`；加载中显示动画。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let controller = &app.controller;
    let label = match controller.step() {
        Step::Result => Some(Span::styled("[ NEW ]", Styles::button())),
        Step::Input if controller.is_loading() => Some(Span::styled(
            format!("[ {} ]", spinner::frame(app.spinner_frame)),
            Styles::button(),
        )),
        Step::Input if is_submittable(controller.city_search_text()) => {
            Some(Span::styled("[ Next ]", Styles::button()))
        }
        Step::Input => None,
    };

    if let Some(label) = label {
        frame.render_widget(
            Paragraph::new(Line::from(vec![label, Span::raw(" ")])).alignment(Alignment::Right),
            area,
        );
    }
}
