//! Message 层：Event 层翻译出的意图，交由 Update 层消费

mod app;
mod input;

pub use app::AppMessage;
pub use input::InputMessage;
