//! Weather Lookup TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)，持有 `LookupController`
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)，返回需要异步执行的 `Command`
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//!
//! 启动顺序：初始化日志 → 加载配置 → 创建 Provider 与运行时 → 初始化终端 →
//! 主循环 → 恢复终端。

mod app;
mod config;
mod event;
mod logging;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::{Context, Result};
use weather_lookup_provider::create_provider_with_timeout;

use config::AppConfig;
use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 初始化日志（先于配置，读取配置文件的日志才能落盘）
    let log_path = logging::init()?;

    // 2. 加载配置（缺少 API Key 时直接报错退出）
    let config = AppConfig::load()?;
    tracing::info!("Starting weather-lookup with {config:?}");

    // 3. 创建 Provider
    let provider = create_provider_with_timeout(config.credentials(), config.request_timeout())
        .context("Invalid weather provider configuration")?;

    // 4. 异步运行时（仅用于执行查询）
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    // 5. 初始化终端
    let mut terminal = init_terminal()?;

    // 6. 创建应用实例
    let mut app = model::App::new(provider);
    app.set_status(format!("Log: {}", log_path.display()));

    // 7. 运行主循环
    let result = app::run(&mut terminal, &mut app, runtime.handle());

    // 8. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("weather-lookup exited");
    result
}
