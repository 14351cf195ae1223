//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use weather_lookup_provider::{
    CurrentWeather, ProviderError, Result, TemperatureUnit, WeatherProvider,
};

use crate::services::LookupController;

// ===== MockWeatherProvider =====

/// 按顺序返回预设结果的 Provider，并记录每次调用的查询
pub struct MockWeatherProvider {
    responses: Mutex<VecDeque<Result<CurrentWeather>>>,
    queries: Mutex<Vec<String>>,
    unit: TemperatureUnit,
}

impl MockWeatherProvider {
    pub fn new(responses: Vec<Result<CurrentWeather>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            queries: Mutex::new(Vec::new()),
            unit: TemperatureUnit::Metric,
        }
    }

    pub fn with_unit(mut self, unit: TemperatureUnit) -> Self {
        self.unit = unit;
        self
    }

    pub async fn call_count(&self) -> usize {
        self.queries.lock().await.len()
    }

    pub async fn queries(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    async fn current_weather(&self, city: &str) -> Result<CurrentWeather> {
        self.queries.lock().await.push(city.to_string());
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(city_not_found(city)))
    }
}

// ===== 工厂方法 =====

pub fn city_not_found(city: &str) -> ProviderError {
    ProviderError::CityNotFound {
        provider: "mock".to_string(),
        city: city.to_string(),
        raw_message: Some("city not found".to_string()),
    }
}

/// 创建使用 mock Provider 的控制器，同时返回 mock 以便断言
pub fn controller_with(
    responses: Vec<Result<CurrentWeather>>,
) -> (LookupController, Arc<MockWeatherProvider>) {
    let mock = Arc::new(MockWeatherProvider::new(responses));
    let controller = LookupController::new(mock.clone());
    (controller, mock)
}
