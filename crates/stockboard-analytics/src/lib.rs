//! 리더보드 집계 및 차트 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 다일 거래대금 순위 합산 (`RankAggregator`)
//! - 투자자별 순매매 병합 (`InvestorFlowMerger`)
//! - 일봉 원본 → 차트 포인트 변환 (`map_series`)
//! - 호버/십자선을 지원하는 캔들차트 (`CandlestickChart`)
//! - 금액/순위 표시 포맷
//!
//! 모든 변환은 동기 순수 함수이며 공유 가변 상태가 없습니다.

pub mod candlestick;
pub mod chart_series;
pub mod error;
pub mod flow_merger;
pub mod format;
pub mod rank_aggregator;

pub use candlestick::{CandlestickChart, ChartGeometry, ChartLayout, HoverState, PointerEvent};
pub use chart_series::map_series;
pub use error::{AnalyticsError, AnalyticsResult};
pub use flow_merger::InvestorFlowMerger;
pub use rank_aggregator::{RankAggregator, DEFAULT_TOP_N};
