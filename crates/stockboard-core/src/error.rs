//! 대시보드 공통 에러 타입.
//!
//! 날짜/기간 파싱과 입력 검증에서 발생하는 에러를 정의합니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum BoardError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 파싱 에러
    #[error("파싱 에러: {0}")]
    Parse(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type BoardResult<T> = Result<T, BoardError>;

impl BoardError {
    /// 사용자 입력 문제로 인한 에러인지 확인합니다.
    pub fn is_user_error(&self) -> bool {
        matches!(self, BoardError::InvalidInput(_) | BoardError::Parse(_))
    }
}

impl From<config::ConfigError> for BoardError {
    fn from(err: config::ConfigError) -> Self {
        BoardError::Config(err.to_string())
    }
}
