use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CurrentWeather, TemperatureUnit};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（OpenWeather 的 `cod` 字段，可能是数字也可能是字符串）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
/// 用于在映射错误时提供额外信息
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 查询的城市（用于 `CityNotFound`）
    pub city: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// 天气提供商 Trait
///
/// 一次调用对应一次网络请求，实现方不得自动重试。
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// 温度数值所使用的单位
    fn unit(&self) -> TemperatureUnit;

    /// 查询城市当前天气
    ///
    /// 非 2xx 状态、传输错误、超时或响应缺少温度/体感温度/描述字段时返回错误。
    async fn current_weather(&self, city: &str) -> Result<CurrentWeather>;
}
