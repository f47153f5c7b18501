//! 더미 데이터 소스.
//!
//! 백엔드 없이 화면을 확인하기 위한 메모리 내 고정 데이터입니다.
//! 종목/섹터 조회와 섹터 생성만 지원하며, 순위·순매매·차트는
//! `DataError::Unsupported`를 돌려줍니다.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use stockboard_core::{
    InvestorFlowQuery, InvestorFlowRecord, RankedStock, RawDailyRecord, Sector, SectorCreate,
    SectorFilter, Stock, TradePriceRankPage, TradeRankQuery,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{DataError, DataResult};
use crate::source::MarketDataSource;

/// 메모리 기반 더미 데이터 소스.
#[derive(Debug)]
pub struct MockDataSource {
    stocks: Vec<Stock>,
    sectors: RwLock<Vec<Sector>>,
    latency: Duration,
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDataSource {
    /// 기본 종목/섹터 데이터로 생성합니다.
    pub fn new() -> Self {
        Self::with_fixtures(default_stocks(), default_sectors())
    }

    pub fn with_fixtures(stocks: Vec<Stock>, sectors: Vec<Sector>) -> Self {
        Self {
            stocks,
            sectors: RwLock::new(sectors),
            latency: Duration::ZERO,
        }
    }

    /// 응답마다 인위적인 지연을 넣습니다 (네트워크 지연 흉내).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    fn unsupported(operation: &str) -> DataError {
        DataError::Unsupported(format!("더미 데이터 모드에서는 {}을(를) 지원하지 않습니다", operation))
    }
}

#[async_trait]
impl MarketDataSource for MockDataSource {
    async fn fetch_ranking_snapshot(&self, _date: NaiveDate) -> DataResult<Vec<RankedStock>> {
        Err(Self::unsupported("거래대금 순위"))
    }

    async fn fetch_investor_flow(
        &self,
        _query: &InvestorFlowQuery,
    ) -> DataResult<Vec<InvestorFlowRecord>> {
        Err(Self::unsupported("투자자별 매매"))
    }

    async fn fetch_daily_chart(
        &self,
        _code: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> DataResult<Vec<RawDailyRecord>> {
        Err(Self::unsupported("일봉 차트"))
    }

    async fn fetch_trade_price_rank(&self, _query: &TradeRankQuery) -> DataResult<TradePriceRankPage> {
        Err(Self::unsupported("거래대금 상위"))
    }

    async fn fetch_stock_list(&self) -> DataResult<Vec<Stock>> {
        self.simulate_latency().await;
        Ok(self.stocks.clone())
    }

    async fn fetch_sector_list(&self, filter: &SectorFilter) -> DataResult<Vec<Sector>> {
        self.simulate_latency().await;
        let sectors = self.sectors.read().await;
        let filtered: Vec<&Sector> = sectors.iter().filter(|s| filter.matches(s)).collect();

        let skip = filter.skip.unwrap_or(0);
        // limit 0 또는 미지정은 전체
        let limit = match filter.limit {
            Some(0) | None => filtered.len(),
            Some(limit) => limit,
        };

        Ok(filtered
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn fetch_sector_detail(&self, code: &str) -> DataResult<Option<Sector>> {
        self.simulate_latency().await;
        let sectors = self.sectors.read().await;
        Ok(sectors.iter().find(|s| s.code == code).cloned())
    }

    async fn create_sector(&self, request: &SectorCreate) -> DataResult<Sector> {
        let request = request.validate()?;
        self.simulate_latency().await;

        let mut sectors = self.sectors.write().await;
        if sectors.iter().any(|s| s.code == request.code) {
            return Err(DataError::InvalidInput("이미 존재하는 섹터 코드입니다.".to_string()));
        }

        let now = Utc::now().to_rfc3339();
        let sector = Sector {
            id: sectors.len() as i64 + 1,
            code: request.code,
            name: request.name,
            market: request.market,
            category: request.category,
            level: request.level,
            parent_id: request.parent_id,
            stock_count: Some(0),
            is_active: true,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };
        debug!(code = %sector.code, id = sector.id, "더미 섹터 생성");
        sectors.push(sector.clone());
        Ok(sector)
    }

    fn source_name(&self) -> &str {
        "mock"
    }
}

fn default_stocks() -> Vec<Stock> {
    [
        ("005930", "삼성전자", "KOSPI", "반도체", 71500.0),
        ("000660", "SK하이닉스", "KOSPI", "반도체", 182000.0),
        ("373220", "LG에너지솔루션", "KOSPI", "2차전지", 385000.0),
        ("207940", "삼성바이오로직스", "KOSPI", "바이오", 812000.0),
        ("005380", "현대차", "KOSPI", "자동차", 245000.0),
        ("035420", "NAVER", "KOSPI", "인터넷", 188500.0),
        ("035720", "카카오", "KOSPI", "인터넷", 41250.0),
        ("105560", "KB금융", "KOSPI", "금융", 78900.0),
        ("247540", "에코프로비엠", "KOSDAQ", "2차전지", 198000.0),
        ("086520", "에코프로", "KOSDAQ", "2차전지", 92300.0),
        ("196170", "알테오젠", "KOSDAQ", "바이오", 315500.0),
        ("263750", "펄어비스", "KOSDAQ", "게임", 38650.0),
    ]
    .into_iter()
    .map(|(code, name, market, sector, price)| {
        Stock::new(code, name)
            .with_market(market)
            .with_sector(sector)
            .with_price(price)
    })
    .collect()
}

fn default_sectors() -> Vec<Sector> {
    let created = "2024-01-02T09:00:00+09:00".to_string();
    [
        ("SEMI", "반도체", "KOSPI", "IT", 42),
        ("BATT", "2차전지", "KOSPI", "제조", 28),
        ("BIO", "바이오", "KOSDAQ", "헬스케어", 57),
        ("BANK", "은행", "KOSPI", "금융", 12),
        ("AUTO", "자동차", "KOSPI", "제조", 19),
        ("GAME", "게임", "KOSDAQ", "서비스", 33),
        ("TELE", "통신", "KRX", "통신", 6),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (code, name, market, category, count))| Sector {
        id: i as i64 + 1,
        code: code.to_string(),
        name: name.to_string(),
        market: Some(market.to_string()),
        category: Some(category.to_string()),
        level: 1,
        parent_id: None,
        stock_count: Some(count),
        is_active: true,
        created_at: Some(created.clone()),
        updated_at: Some(created.clone()),
    })
    .collect()
}
