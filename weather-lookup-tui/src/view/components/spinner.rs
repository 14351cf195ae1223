//! 加载动画

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// 根据帧计数取动画字符
pub fn frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}
