//! 配色与样式

use ratatui::style::{Color, Modifier, Style};

/// 调色板
pub struct Palette;

impl Palette {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const ACCENT: Color = Color::Rgb(158, 156, 156);
    pub const ERROR: Color = Color::Rgb(255, 0, 0);
    pub const DESCRIPTION: Color = Color::Rgb(202, 202, 152);
    pub const MUTED: Color = Color::Rgb(110, 110, 110);
}

/// 预定义样式
pub struct Styles;

impl Styles {
    /// 整个屏幕的背景
    pub fn background() -> Style {
        Style::default().bg(Palette::BLACK).fg(Palette::WHITE)
    }

    /// 卡片边框
    pub fn card_border() -> Style {
        Style::default().fg(Palette::ACCENT)
    }

    /// 输入文本
    pub fn input_text() -> Style {
        Style::default().fg(Palette::WHITE)
    }

    /// 输入框占位符
    pub fn placeholder() -> Style {
        Style::default().fg(Palette::MUTED)
    }

    /// 输入框下划线
    pub fn underline() -> Style {
        Style::default().fg(Palette::ACCENT)
    }

    pub fn error() -> Style {
        Style::default().fg(Palette::ERROR)
    }

    /// 结果句子中的普通文字
    pub fn sentence() -> Style {
        Style::default()
            .fg(Palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// 结果句子中的数值与城市
    pub fn highlight() -> Style {
        Style::default()
            .fg(Palette::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// 天气描述
    pub fn description() -> Style {
        Style::default()
            .fg(Palette::DESCRIPTION)
            .add_modifier(Modifier::BOLD)
    }

    /// 按钮
    pub fn button() -> Style {
        Style::default()
            .fg(Palette::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// 当前步骤圆点
    pub fn step_active() -> Style {
        Style::default().fg(Palette::WHITE)
    }

    /// 其他步骤圆点
    pub fn step_inactive() -> Style {
        Style::default().fg(Palette::ACCENT)
    }

    /// 状态栏样式
    pub fn statusbar() -> Style {
        Style::default().bg(Palette::BLACK).fg(Palette::MUTED)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Palette::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Palette::ACCENT)
    }
}
