//! 结果步骤页面
//!
//! "It's 21° in London. feels like 19°. Expect clear sky today"

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use weather_lookup_core::WeatherResult;

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染结果页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(result) = app.controller.weather_result() else {
        return;
    };

    let paragraph = Paragraph::new(sentence(result))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    // 垂直方向大致居中
    let height = area.height.min(3);
    let y = area.y + (area.height - height) / 2;
    frame.render_widget(paragraph, Rect { y, height, ..area });
}

/// 温度显示：原值加度数符号
pub fn format_temperature(value: f64) -> String {
    format!("{value}°")
}

/// 带样式的结果句子
fn sentence(result: &WeatherResult) -> Line<'_> {
    Line::from(vec![
        Span::styled("It's ", Styles::sentence()),
        Span::styled(format_temperature(result.temperature), Styles::highlight()),
        Span::styled(" in ", Styles::sentence()),
        Span::styled(result.city_label.as_str(), Styles::highlight()),
        Span::styled(". feels like ", Styles::sentence()),
        Span::styled(format_temperature(result.feels_like), Styles::highlight()),
        Span::styled(". Expect ", Styles::sentence()),
        Span::styled(result.description.as_str(), Styles::description()),
        Span::styled(" today", Styles::sentence()),
    ])
}
