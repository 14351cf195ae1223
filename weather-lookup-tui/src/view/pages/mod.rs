//! 页面渲染

pub mod input;
pub mod result;
