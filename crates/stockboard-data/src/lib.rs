//! 시세 데이터 수집 모듈.
//!
//! - [`MarketDataSource`]: 데이터 소스 추상화
//! - [`ApiClient`]: 원격 REST API 클라이언트 (reqwest)
//! - [`MockDataSource`]: 백엔드 없이 쓰는 더미 데이터
//! - [`gather_best_effort`]: 부분 실패를 허용하는 병렬 수집
//! - [`ReportCoordinator`]: 기간 리포트 조립 (최신 요청 우선)

pub mod client;
pub mod envelope;
pub mod error;
pub mod gather;
pub mod mock;
pub mod report;
pub mod source;

use std::sync::Arc;

use stockboard_core::ApiConfig;
use tracing::info;

pub use client::ApiClient;
pub use envelope::ApiEnvelope;
pub use error::{DataError, DataResult};
pub use gather::{gather_best_effort, Gathered};
pub use mock::MockDataSource;
pub use report::{
    DailyReport, GenerationTicket, ReportCoordinator, ReportRequest, ReportSection,
    RequestGeneration,
};
pub use source::MarketDataSource;

/// 설정에 따라 데이터 소스를 만듭니다 (`use_mock`이면 더미 데이터).
pub fn source_from_config(config: &ApiConfig) -> DataResult<Arc<dyn MarketDataSource>> {
    if config.use_mock {
        info!("더미 데이터 모드");
        return Ok(Arc::new(MockDataSource::new()));
    }
    info!(base_url = %config.base_url, "원격 API 사용");
    Ok(Arc::new(ApiClient::from_config(config)?))
}
