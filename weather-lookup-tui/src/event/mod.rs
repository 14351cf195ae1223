//! Event 层：把终端事件翻译成 `AppMessage`

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
