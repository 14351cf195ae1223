//! OpenWeather HTTP 请求方法

use crate::error::Result;
use crate::http_client::{HttpUtils, is_success};
use crate::providers::common::normalize_base_url;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::redact_query_param;

use super::{OpenWeatherErrorBody, OpenWeatherProvider, OpenWeatherResponse};

impl OpenWeatherProvider {
    /// 构建 `GET /weather` 请求 URL
    pub(crate) fn weather_url(&self, city: &str) -> String {
        let mut url = format!(
            "{}/weather?q={}&appid={}",
            normalize_base_url(&self.base_url),
            urlencoding::encode(city),
            urlencoding::encode(&self.api_key)
        );
        if let Some(units) = self.units.query_value() {
            url.push_str("&units=");
            url.push_str(units);
        }
        url
    }

    /// 执行 `GET /weather` 请求
    pub(crate) async fn get_weather(&self, city: &str) -> Result<OpenWeatherResponse> {
        let url = self.weather_url(city);
        let url_for_log = redact_query_param(&url, "appid");

        let (status_code, response_text) = HttpUtils::execute_request(
            self.client.get(&url),
            self.provider_name(),
            "GET",
            &url_for_log,
        )
        .await?;

        if !is_success(status_code) {
            return Err(self.error_from_body(status_code, &response_text, city));
        }

        HttpUtils::parse_json(&response_text, self.provider_name())
    }

    /// 将非 2xx 响应转换为统一错误
    ///
    /// 优先使用响应体里的 `cod`，缺失时退回 HTTP 状态码。
    pub(crate) fn error_from_body(
        &self,
        status_code: u16,
        response_text: &str,
        city: &str,
    ) -> crate::error::ProviderError {
        let context = ErrorContext {
            city: Some(city.to_string()),
        };

        let raw = match serde_json::from_str::<OpenWeatherErrorBody>(response_text) {
            Ok(body) => {
                let message = body
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("HTTP {status_code}"));
                match body.code() {
                    Some(code) => RawApiError::with_code(code, message),
                    None => RawApiError::with_code(status_code.to_string(), message),
                }
            }
            Err(_) if response_text.trim().is_empty() => {
                RawApiError::with_code(status_code.to_string(), format!("HTTP {status_code}"))
            }
            Err(_) => RawApiError::new(response_text.trim().to_string()),
        };

        log::warn!(
            "[{}] API error (HTTP {status_code}): {}",
            self.provider_name(),
            raw.message
        );
        self.map_error(raw, context)
    }
}
