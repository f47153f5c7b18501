//! 설정 관리.
//!
//! 파일(TOML)과 `STOCKBOARD__` 접두사 환경 변수에서 애플리케이션 설정을 로드합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 원격 API 설정
    #[serde(default)]
    pub api: ApiConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 리포트 집계 설정
    #[serde(default)]
    pub report: ReportConfig,
    /// 차트 설정
    #[serde(default)]
    pub chart: ChartConfig,
}

/// 원격 데이터 API 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// REST API 기본 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (초)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// 더미 데이터 모드 (종목/섹터만 지원)
    #[serde(default)]
    pub use_mock: bool,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            use_mock: false,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 리포트 집계 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// 리더보드 상위 N개
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// 거래대금 집계에 사용할 최대 거래일 수
    #[serde(default = "default_max_trade_days")]
    pub max_trade_days: usize,
}

fn default_top_n() -> usize {
    10
}
fn default_max_trade_days() -> usize {
    20
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            max_trade_days: default_max_trade_days(),
        }
    }
}

/// 캔들 차트 캔버스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChartConfig {
    /// SVG 너비
    #[serde(default = "default_chart_width")]
    pub width: f64,
    /// SVG 높이
    #[serde(default = "default_chart_height")]
    pub height: f64,
}

fn default_chart_width() -> f64 {
    800.0
}
fn default_chart_height() -> f64 {
    300.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

impl ChartConfig {
    /// 캔버스 크기는 유한한 양수여야 합니다.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        for (key, value) in [("chart.width", self.width), ("chart.height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(config::ConfigError::Message(format!(
                    "{} must be a positive number, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("STOCKBOARD")
                    .separator("__")
                    .try_parsing(true),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.chart.validate()?;
        Ok(config)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}
