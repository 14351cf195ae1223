//! OpenWeather `WeatherProvider` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{ProviderErrorMapper, WeatherProvider};
use crate::types::{CurrentWeather, TemperatureUnit};
use crate::utils::datetime::from_unix_seconds;

use super::{OpenWeatherProvider, OpenWeatherResponse};

impl OpenWeatherProvider {
    /// 将 OpenWeather 响应转换为 `CurrentWeather`
    ///
    /// `main.temp`、`main.feels_like` 和第一条 `weather[].description` 缺一不可。
    pub(crate) fn response_to_weather(&self, resp: OpenWeatherResponse) -> Result<CurrentWeather> {
        let main = resp
            .main
            .ok_or_else(|| self.parse_error("响应中缺少 main 字段"))?;
        let temperature = main
            .temp
            .ok_or_else(|| self.parse_error("响应中缺少 main.temp 字段"))?;
        let feels_like = main
            .feels_like
            .ok_or_else(|| self.parse_error("响应中缺少 main.feels_like 字段"))?;
        let description = resp
            .weather
            .into_iter()
            .find_map(|c| c.description)
            .ok_or_else(|| self.parse_error("响应中缺少 weather[].description 字段"))?;

        Ok(CurrentWeather {
            temperature,
            feels_like,
            description,
            city_name: resp.name.filter(|n| !n.is_empty()),
            country: resp.sys.and_then(|s| s.country),
            observed_at: resp.dt.and_then(from_unix_seconds),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    fn id(&self) -> &'static str {
        "openweather"
    }

    fn unit(&self) -> TemperatureUnit {
        self.units
    }

    async fn current_weather(&self, city: &str) -> Result<CurrentWeather> {
        if city.trim().is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "q".to_string(),
                detail: "city must not be empty".to_string(),
            });
        }

        let resp = self.get_weather(city).await?;
        self.response_to_weather(resp)
    }
}
