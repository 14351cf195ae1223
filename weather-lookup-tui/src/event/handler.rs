//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use weather_lookup_core::Step;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InputMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Enter;
    }

    match app.controller.step() {
        Step::Input => handle_input_keys(key),
        Step::Result => handle_result_keys(key),
    }
}

/// 输入步骤的按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::DELETE_CHAR.matches(&key) {
        return AppMessage::Input(InputMessage::Backspace);
    }

    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Input(InputMessage::Clear);
    }

    match key.code {
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            AppMessage::Input(InputMessage::Char(c))
        }
        _ => AppMessage::Noop,
    }
}

/// 结果步骤的按键
fn handle_result_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::NEW_SEARCH.matches(&key) {
        return AppMessage::NewSearch;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    AppMessage::Noop
}
