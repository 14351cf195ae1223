//! 步骤指示圆点

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use weather_lookup_core::Step;

use crate::view::theme::Styles;

const STEPS: [Step; 2] = [Step::Input, Step::Result];

/// 渲染步骤指示（当前步骤为实心白点）
pub fn render(current: Step, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(STEPS.len() * 2);
    for (i, step) in STEPS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        if *step == current {
            spans.push(Span::styled("●", Styles::step_active()));
        } else {
            spans.push(Span::styled("●", Styles::step_inactive()));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
