//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use weather_lookup_provider::{
    ProviderCredentials, TemperatureUnit, WeatherProvider, create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 不存在的城市名（用于 404 测试）
pub const UNKNOWN_CITY: &str = "zzzzzzzzzz-no-such-city";

/// 测试上下文 - 封装 Provider
pub struct TestContext {
    pub provider: Arc<dyn WeatherProvider>,
}

impl TestContext {
    /// 创建 OpenWeather 测试上下文
    ///
    /// `OPENWEATHER_BASE_URL` 可选，默认为公共 API。
    pub fn openweather(units: TemperatureUnit) -> Option<Self> {
        let api_key = env::var("OPENWEATHER_API_KEY").ok()?;
        let base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5".to_string());

        let credentials = ProviderCredentials::OpenWeather {
            base_url,
            api_key,
            units,
        };
        let provider = create_provider(credentials).ok()?;

        Some(Self { provider })
    }

    /// 指向本地 mock 服务器的上下文
    pub fn local(base_url: &str) -> Option<Self> {
        let credentials = ProviderCredentials::OpenWeather {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            units: TemperatureUnit::Metric,
        };
        let provider = create_provider(credentials).ok()?;
        Some(Self { provider })
    }

    /// 使用错误 Key 的上下文
    pub fn openweather_bad_key() -> Option<Self> {
        let credentials = ProviderCredentials::OpenWeather {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key: "0000000000000000000000000000000".to_string(),
            units: TemperatureUnit::Standard,
        };
        let provider = create_provider(credentials).ok()?;
        Some(Self { provider })
    }
}
