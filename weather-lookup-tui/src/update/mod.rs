//! Update 层：消费消息、修改 Model，并返回需要在外部执行的命令

mod input;

use weather_lookup_core::{LookupOutcome, PendingLookup, Step};

use crate::message::AppMessage;
use crate::model::App;

/// Update 产生的副作用，由主循环执行
#[derive(Debug)]
pub enum Command {
    None,
    /// 在运行时上执行查询，完成后以 `AppMessage::LookupFinished` 送回
    Lookup(PendingLookup),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Tick => {
            if app.controller.is_loading() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
        }

        AppMessage::Input(input_msg) => {
            input::update(app, input_msg);
        }

        AppMessage::Enter => {
            app.clear_status();
            if let Some(pending) = app.controller.begin_enter_key() {
                log::info!("Looking up weather for '{}'", pending.query());
                app.spinner_frame = 0;
                return Command::Lookup(pending);
            }
        }

        AppMessage::NewSearch => {
            if app.controller.step() == Step::Result {
                app.controller.reset();
            }
        }

        AppMessage::LookupFinished(completed) => match app.controller.complete(completed) {
            LookupOutcome::Stale => log::debug!("Dropped stale lookup result"),
            outcome => log::debug!("Lookup finished: {outcome:?}"),
        },

        AppMessage::Noop => {}
    }

    Command::None
}
