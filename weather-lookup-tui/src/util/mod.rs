//! Util 层：终端初始化和恢复

mod terminal;

pub use terminal::{Term, init_terminal, restore_terminal};
