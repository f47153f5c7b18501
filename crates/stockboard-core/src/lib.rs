//! # Stockboard Core
//!
//! 시세 대시보드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! - 거래대금 순위, 투자자별 순매매, 일봉 차트 데이터 구조체
//! - 종목/섹터 마스터
//! - 시장/거래소/투자자 구분 코드와 조회 기간
//! - 설정 관리 및 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use crate::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
