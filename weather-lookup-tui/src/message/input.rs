//! 输入框消息

/// 输入框编辑消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMessage {
    /// 追加字符
    Char(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空
    Clear,
}
