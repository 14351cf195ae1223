//! 应用级消息

use weather_lookup_core::CompletedLookup;

use super::InputMessage;

/// 应用消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 定时刷新（驱动加载动画）
    Tick,

    /// 编辑查询文本
    Input(InputMessage),

    /// 回车：输入步骤提交，结果步骤重新搜索
    Enter,

    /// 回到输入步骤
    NewSearch,

    /// 后台查询完成
    LookupFinished(CompletedLookup),

    /// 无操作
    Noop,
}
