//! 분석 단계 에러 타입.

use thiserror::Error;

/// 차트 시리즈 변환 등 분석 작업에서 발생하는 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// 원본 레코드의 필드를 해석할 수 없음
    #[error("잘못된 레코드 (index={index}, {field}={value:?})")]
    InvalidRecord {
        /// 입력 내 위치 (0부터)
        index: usize,
        /// 필드명
        field: &'static str,
        /// 원본 값
        value: String,
    },

    /// 캔버스 크기가 여백을 담지 못함
    #[error("잘못된 차트 크기: {0}")]
    InvalidLayout(String),
}

/// 분석 작업을 위한 Result 타입.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
