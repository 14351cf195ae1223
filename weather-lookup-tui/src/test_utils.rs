//! 测试辅助模块

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use weather_lookup_provider::{
    CurrentWeather, ProviderError, Result, TemperatureUnit, WeatherProvider,
};

use crate::model::App;

/// 按顺序返回预设结果的 Provider
pub struct StubProvider {
    responses: Mutex<VecDeque<Result<CurrentWeather>>>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(responses: Vec<Result<CurrentWeather>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    fn id(&self) -> &'static str {
        "stub"
    }

    fn unit(&self) -> TemperatureUnit {
        TemperatureUnit::Metric
    }

    async fn current_weather(&self, city: &str) -> Result<CurrentWeather> {
        self.calls.lock().unwrap().push(city.to_string());
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(not_found(city)))
    }
}

pub fn not_found(city: &str) -> ProviderError {
    ProviderError::CityNotFound {
        provider: "stub".to_string(),
        city: city.to_string(),
        raw_message: None,
    }
}

pub fn london() -> CurrentWeather {
    CurrentWeather::new(21.0, 19.0, "clear sky")
}

/// 创建使用 stub Provider 的应用
pub fn app_with(responses: Vec<Result<CurrentWeather>>) -> (App, Arc<StubProvider>) {
    let stub = Arc::new(StubProvider::new(responses));
    (App::new(stub.clone()), stub)
}
