//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
///
/// 构建失败时（TLS 后端初始化失败等）退回到默认 Client，并记录错误。
pub fn create_http_client(request_timeout: Duration) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(request_timeout)
        .build()
        .unwrap_or_else(|e| {
            log::error!("Failed to build HTTP client with timeouts, using defaults: {e}");
            Client::new()
        })
}

// ============ URL 处理 ============

/// 去掉 base URL 末尾的斜杠
pub fn normalize_base_url(base_url: &str) -> &str {
    base_url.trim().trim_end_matches('/')
}
