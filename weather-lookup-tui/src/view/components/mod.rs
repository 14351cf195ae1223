//! 可复用组件

pub mod button;
pub mod error_message;
pub mod spinner;
pub mod statusbar;
pub mod step_indicator;
