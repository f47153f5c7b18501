//! 기간 리포트 조립.
//!
//! 세 섹션을 동시에 조회합니다:
//! - 거래대금: 영업일마다 순위 스냅샷을 받아 합산 (최신일부터, 최대 20일)
//! - 외국인 순매수 / 기관 순매수: 시장 구분별로 받아 병합 (통합 거래소 기준)
//!
//! 섹션마다 성공/실패 건수를 따로 기록하며, 한 섹션이 전부 실패해도
//! 나머지 섹션은 정상적으로 채워집니다.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use stockboard_analytics::{InvestorFlowMerger, RankAggregator};
use stockboard_core::{
    business_days_between, AggregatedStock, InvestorClass, InvestorFlowQuery, MergedFlowRecord,
    ReportConfig, ReportMarket, TradeDirection, Venue,
};
use tracing::{debug, info};

use crate::error::{DataError, DataResult};
use crate::gather::{gather_best_effort, Gathered};
use crate::source::MarketDataSource;

/// 리포트 조회 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub market: ReportMarket,
}

/// 리포트 한 섹션.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection<T> {
    pub items: Vec<T>,
    /// 성공한 조회 수
    pub succeeded: usize,
    /// 실패한 조회 수
    pub failed: usize,
}

impl<T> ReportSection<T> {
    fn from_gathered<S>(gathered: &Gathered<S>, items: Vec<T>) -> Self {
        Self {
            items,
            succeeded: gathered.succeeded(),
            failed: gathered.failed,
        }
    }

    /// 모든 조회가 실패한 섹션인지.
    pub fn is_failed(&self) -> bool {
        self.succeeded == 0 && self.failed > 0
    }
}

/// 기간 리포트.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    pub request: ReportRequest,
    /// 조회 대상 영업일 (최신순)
    pub business_days: Vec<NaiveDate>,
    /// 거래대금 누적 상위
    pub trading: ReportSection<AggregatedStock>,
    /// 외국인 순매수 상위
    pub foreign: ReportSection<MergedFlowRecord>,
    /// 기관 순매수 상위
    pub institution: ReportSection<MergedFlowRecord>,
}

impl DailyReport {
    /// 실제로 집계에 반영된 거래일 수.
    pub fn fetched_days(&self) -> usize {
        self.trading.succeeded
    }
}

/// 요청 세대 카운터.
///
/// 새 요청마다 티켓을 발급하며, 더 최근 티켓이 발급된 뒤 도착한 결과는 버립니다.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

/// 요청 세대 티켓.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 티켓 발급 (이전 티켓은 모두 무효화).
    pub fn next(&self) -> GenerationTicket {
        GenerationTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// 티켓이 가장 최근 것인지.
    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}

/// 리포트 조립기.
pub struct ReportCoordinator {
    source: Arc<dyn MarketDataSource>,
    aggregator: RankAggregator,
    merger: InvestorFlowMerger,
    max_trade_days: usize,
    generation: RequestGeneration,
}

impl ReportCoordinator {
    /// 기본 설정(상위 10개, 최대 20거래일)으로 생성합니다.
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self::with_config(source, &ReportConfig::default())
    }

    pub fn with_config(source: Arc<dyn MarketDataSource>, config: &ReportConfig) -> Self {
        Self {
            source,
            aggregator: RankAggregator::with_top_n(config.top_n),
            merger: InvestorFlowMerger::with_top_n(config.top_n),
            max_trade_days: config.max_trade_days,
            generation: RequestGeneration::new(),
        }
    }

    /// 최신 요청의 결과만 돌려줍니다.
    ///
    /// 조회 도중 더 새로운 `load`가 시작되었다면 `Ok(None)`입니다.
    pub async fn load(&self, request: ReportRequest) -> DataResult<Option<DailyReport>> {
        let ticket = self.generation.next();
        let report = self.build(request).await?;

        if !self.generation.is_current(ticket) {
            debug!(?ticket, "이전 요청 결과 폐기");
            return Ok(None);
        }
        Ok(Some(report))
    }

    /// 세대 확인 없이 리포트를 조립합니다.
    pub async fn build(&self, request: ReportRequest) -> DataResult<DailyReport> {
        if request.start > request.end {
            return Err(DataError::InvalidInput(format!(
                "시작일({})이 종료일({})보다 늦습니다",
                request.start, request.end
            )));
        }

        let business_days = business_days_between(request.start, request.end, self.max_trade_days);
        info!(
            source = self.source.source_name(),
            start = %request.start,
            end = %request.end,
            market = ?request.market,
            days = business_days.len(),
            "리포트 조회 시작"
        );

        let (trading, foreign, institution) = tokio::join!(
            self.trading_section(&business_days),
            self.flow_section(&request, InvestorClass::Foreign),
            self.flow_section(&request, InvestorClass::Institution),
        );

        info!(
            trading_days = trading.succeeded,
            trading_failed = trading.failed,
            foreign_failed = foreign.failed,
            institution_failed = institution.failed,
            "리포트 조회 완료"
        );

        Ok(DailyReport {
            request,
            business_days,
            trading,
            foreign,
            institution,
        })
    }

    async fn trading_section(&self, days: &[NaiveDate]) -> ReportSection<AggregatedStock> {
        let source = &self.source;
        let gathered = gather_best_effort(
            "trading_ranking",
            days.iter().map(|day| source.fetch_ranking_snapshot(*day)),
        )
        .await;

        let items = self.aggregator.aggregate(&gathered.values);
        ReportSection::from_gathered(&gathered, items)
    }

    async fn flow_section(
        &self,
        request: &ReportRequest,
        investor: InvestorClass,
    ) -> ReportSection<MergedFlowRecord> {
        let queries: Vec<InvestorFlowQuery> = request
            .market
            .segments()
            .into_iter()
            .map(|segment| InvestorFlowQuery {
                start: request.start,
                end: request.end,
                direction: TradeDirection::NetBuy,
                segment,
                investor,
                venue: Venue::Integrated,
            })
            .collect();

        let source = &self.source;
        let label = match investor {
            InvestorClass::Foreign => "foreign_flow",
            InvestorClass::Institution => "institution_flow",
            InvestorClass::Individual => "individual_flow",
        };
        let gathered =
            gather_best_effort(label, queries.iter().map(|q| source.fetch_investor_flow(q))).await;

        let items = self.merger.merge(&gathered.values);
        ReportSection::from_gathered(&gathered, items)
    }
}
