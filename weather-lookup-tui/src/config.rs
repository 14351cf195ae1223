//! 应用配置
//!
//! 配置来源（后者覆盖前者）：
//! 1. 内置默认值
//! 2. `<config_dir>/weather-lookup/config.json`
//! 3. 环境变量 `WEATHER_API_BASE_URL` / `WEATHER_API_KEY` / `WEATHER_UNITS`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use weather_lookup_provider::{OPENWEATHER_API_BASE, ProviderCredentials, TemperatureUnit};

/// 默认 API 地址
pub const DEFAULT_BASE_URL: &str = OPENWEATHER_API_BASE;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const ENV_BASE_URL: &str = "WEATHER_API_BASE_URL";
pub const ENV_API_KEY: &str = "WEATHER_API_KEY";
pub const ENV_UNITS: &str = "WEATHER_UNITS";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unknown unit system '{0}' (expected standard, metric or imperial)")]
    InvalidUnits(String),

    #[error("request_timeout_secs must be greater than 0")]
    InvalidTimeout,

    #[error(
        "No API key configured. Set WEATHER_API_KEY or add \"api_key\" to {}",
        .0.display()
    )]
    MissingApiKey(PathBuf),
}

/// 配置文件内容，所有字段可选
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub units: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// 合并后的应用配置
#[derive(Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub api_key: String,
    pub units: TemperatureUnit,
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &weather_lookup_provider::log_sanitizer::mask_secret(&self.api_key),
            )
            .field("units", &self.units)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// 从默认位置和进程环境加载
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path();
        let file = read_config_file(&path)?;
        Self::resolve(file, |key| std::env::var(key).ok(), &path)
    }

    /// 合并文件配置与环境变量
    ///
    /// `env` 以变量名查询值，空字符串视为未设置。
    pub fn resolve(
        file: ConfigFile,
        env: impl Fn(&str) -> Option<String>,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let base_url = env(ENV_BASE_URL)
            .or(file.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_key = env(ENV_API_KEY)
            .or(file.api_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(path.to_path_buf()))?;

        let units = match env(ENV_UNITS).or(file.units) {
            Some(code) => {
                TemperatureUnit::from_code(&code).ok_or(ConfigError::InvalidUnits(code))?
            }
            None => TemperatureUnit::default(),
        };

        let request_timeout_secs = match file.request_timeout_secs {
            Some(0) => return Err(ConfigError::InvalidTimeout),
            Some(secs) => secs,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key,
            units,
            request_timeout_secs,
        })
    }

    pub fn credentials(&self) -> ProviderCredentials {
        ProviderCredentials::OpenWeather {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            units: self.units,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("weather-lookup")
}

/// 获取配置文件路径
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.json")
}

/// 读取配置文件，文件不存在时返回空配置
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    if !path.exists() {
        log::debug!("Config file {} not found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    serde_json::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
