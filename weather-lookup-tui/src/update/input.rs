//! 输入框消息处理

use weather_lookup_core::Step;

use crate::message::InputMessage;
use crate::model::App;

/// 处理输入框消息
///
/// 只在输入步骤生效；每次编辑都会经由控制器清除错误。
pub fn update(app: &mut App, msg: InputMessage) {
    if app.controller.step() != Step::Input {
        return;
    }

    let mut text = app.controller.city_search_text().to_string();
    match msg {
        InputMessage::Char(c) => text.push(c),
        InputMessage::Backspace => {
            text.pop();
        }
        InputMessage::Clear => text.clear(),
    }

    app.clear_status();
    app.controller.update_query(text);
}
