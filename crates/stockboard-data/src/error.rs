//! 데이터 소스 에러 타입.

use stockboard_core::BoardError;
use thiserror::Error;

/// 원격 API 및 데이터 소스 관련 에러.
#[derive(Debug, Error)]
pub enum DataError {
    /// 네트워크/연결 에러 (타임아웃 포함)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 2xx가 아닌 HTTP 응답
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// 응답 본문이 `success: false`를 알림
    #[error("API 에러: {0}")]
    Api(String),

    /// 응답 파싱 실패
    #[error("파싱 에러: {0}")]
    Parse(String),

    /// 요청 파라미터 검증 실패
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 현재 소스에서 지원하지 않는 작업
    #[error("지원하지 않는 기능: {0}")]
    Unsupported(String),
}

/// 데이터 작업을 위한 Result 타입.
pub type DataResult<T> = Result<T, DataError>;

impl DataError {
    /// 재시도 가능한 에러인지 확인 (네트워크 에러 및 5xx).
    pub fn is_retryable(&self) -> bool {
        match self {
            DataError::Network(_) => true,
            DataError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// 404 응답인지 확인.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::Http { status: 404, .. })
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DataError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            DataError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            DataError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

impl From<BoardError> for DataError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Parse(msg) => DataError::Parse(msg),
            BoardError::InvalidInput(msg) | BoardError::Config(msg) => DataError::InvalidInput(msg),
        }
    }
}
