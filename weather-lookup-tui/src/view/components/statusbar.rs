//! 状态栏

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use weather_lookup_core::Step;

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::hint_desc()));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    spans.push(Span::styled(" │ ", Styles::hint_desc()));
    spans.push(Span::styled(
        format!("Units: {}", app.controller.unit().symbol()),
        Styles::hint_desc(),
    ));

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Styles::hint_desc()));
        spans.push(Span::styled(msg.clone(), Styles::statusbar()));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        area,
    );
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.controller.step() {
        Step::Input if app.controller.is_loading() => vec![("Esc/Ctrl+C", "Quit")],
        Step::Input => vec![
            ("Enter", "Search"),
            ("Ctrl+U", "Clear"),
            ("Esc", "Quit"),
        ],
        Step::Result => vec![("Enter/Esc", "New search"), ("q", "Quit")],
    }
}
