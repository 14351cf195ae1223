//! OpenWeather API 类型定义

use serde::Deserialize;
use serde_json::Value;

/// `GET /weather` 成功响应（仅包含用到的字段）
#[derive(Debug, Deserialize)]
pub struct OpenWeatherResponse {
    pub main: Option<OpenWeatherMain>,
    #[serde(default)]
    pub weather: Vec<OpenWeatherCondition>,
    pub name: Option<String>,
    pub sys: Option<OpenWeatherSys>,
    pub dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct OpenWeatherMain {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OpenWeatherCondition {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenWeatherSys {
    pub country: Option<String>,
}

/// 错误响应：`{"cod": "404", "message": "city not found"}`
///
/// `cod` 有时是数字，有时是字符串。
#[derive(Debug, Deserialize)]
pub struct OpenWeatherErrorBody {
    pub cod: Option<Value>,
    pub message: Option<String>,
}

impl OpenWeatherErrorBody {
    /// 将 `cod` 统一为字符串
    pub fn code(&self) -> Option<String> {
        match self.cod.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
