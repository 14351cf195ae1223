//! Lookup state types

use serde::{Deserialize, Serialize};
use weather_lookup_provider::CurrentWeather;

use crate::utils::text::{capitalize_words, normalize_query};

/// 当前所处步骤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// 输入城市
    #[default]
    Input,
    /// 展示结果
    Result,
}

/// 成功查询后展示的天气结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResult {
    pub temperature: f64,
    pub feels_like: f64,
    pub description: String,
    /// 用户输入的城市名（去空白、单词首字母大写）
    pub city_label: String,
    /// Provider 解析出的国家代码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl WeatherResult {
    /// 由 Provider 返回值和原始查询构建
    pub fn from_weather(query: &str, weather: CurrentWeather) -> Self {
        Self {
            temperature: weather.temperature,
            feels_like: weather.feels_like,
            description: weather.description,
            city_label: capitalize_words(normalize_query(query)),
            country: weather.country,
        }
    }
}

/// 查询状态机
///
/// 每个变体只携带该步骤下合法的数据：结果只存在于 `Result`，
/// 错误和加载标志只存在于 `Input`。
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    Input {
        query: String,
        error: Option<String>,
        /// 正在进行的查询的代号
        in_flight: Option<u64>,
    },
    Result {
        query: String,
        weather: WeatherResult,
    },
}

impl Default for LookupState {
    fn default() -> Self {
        Self::Input {
            query: String::new(),
            error: None,
            in_flight: None,
        }
    }
}

impl LookupState {
    pub fn step(&self) -> Step {
        match self {
            Self::Input { .. } => Step::Input,
            Self::Result { .. } => Step::Result,
        }
    }

    pub fn city_search_text(&self) -> &str {
        match self {
            Self::Input { query, .. } | Self::Result { query, .. } => query,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            Self::Input {
                in_flight: Some(_),
                ..
            }
        )
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Input { error, .. } => error.as_deref(),
            Self::Result { .. } => None,
        }
    }

    pub fn weather_result(&self) -> Option<&WeatherResult> {
        match self {
            Self::Input { .. } => None,
            Self::Result { weather, .. } => Some(weather),
        }
    }

    /// 扁平快照
    pub fn snapshot(&self) -> LookupSnapshot {
        LookupSnapshot {
            step: self.step(),
            city_search_text: self.city_search_text().to_string(),
            is_loading: self.is_loading(),
            error_message: self.error_message().map(str::to_string),
            weather_result: self.weather_result().cloned(),
        }
    }
}

/// 供展示层读取的扁平视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupSnapshot {
    pub step: Step,
    pub city_search_text: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub weather_result: Option<WeatherResult>,
}
