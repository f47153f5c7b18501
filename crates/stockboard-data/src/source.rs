//! 시세 데이터 소스 추상화.
//!
//! 원격 API(`ApiClient`)와 오프라인 데모용 고정 데이터(`MockDataSource`)를
//! 같은 인터페이스로 다룹니다. 날짜는 경계에서 `YYYYMMDD`로 변환됩니다.

use async_trait::async_trait;
use chrono::NaiveDate;
use stockboard_core::{
    InvestorFlowQuery, InvestorFlowRecord, RankedStock, RawDailyRecord, Sector, SectorCreate,
    SectorFilter, Stock, TradePriceRankPage, TradeRankQuery,
};

use crate::error::DataResult;

/// 시세 데이터 소스 trait.
///
/// 각 조회는 독립적이며, 호출 측에서 여러 조회를 병렬로 실행할 수 있습니다.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// 특정 거래일의 거래대금 순위 스냅샷.
    async fn fetch_ranking_snapshot(&self, date: NaiveDate) -> DataResult<Vec<RankedStock>>;

    /// 투자자별 일별 순매매 상위 목록.
    async fn fetch_investor_flow(
        &self,
        query: &InvestorFlowQuery,
    ) -> DataResult<Vec<InvestorFlowRecord>>;

    /// 일봉 원본 레코드 (오래된 순).
    async fn fetch_daily_chart(
        &self,
        code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DataResult<Vec<RawDailyRecord>>;

    /// 실시간 거래대금 상위 (연속조회 한 페이지).
    async fn fetch_trade_price_rank(&self, query: &TradeRankQuery) -> DataResult<TradePriceRankPage>;

    /// 종목 목록.
    async fn fetch_stock_list(&self) -> DataResult<Vec<Stock>>;

    /// 섹터 목록.
    async fn fetch_sector_list(&self, filter: &SectorFilter) -> DataResult<Vec<Sector>>;

    /// 섹터 상세. 없으면 `None`.
    async fn fetch_sector_detail(&self, code: &str) -> DataResult<Option<Sector>>;

    /// 섹터 생성.
    ///
    /// # Errors
    ///
    /// - `DataError::InvalidInput`: 필수 항목 누락, 코드 중복
    async fn create_sector(&self, request: &SectorCreate) -> DataResult<Sector>;

    /// 로깅용 소스 이름.
    fn source_name(&self) -> &str;
}
