//! 应用主状态

use std::sync::Arc;

use weather_lookup_core::LookupController;
use weather_lookup_provider::WeatherProvider;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 查询状态机，唯一持有 `LookupState`
    pub controller: LookupController,

    /// 加载动画帧
    pub spinner_frame: usize,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            should_quit: false,
            controller: LookupController::new(provider),
            spinner_frame: 0,
            status_message: None,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
