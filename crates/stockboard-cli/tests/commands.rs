//! 명령 실행 통합 테스트 (가짜 데이터 소스).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use stockboard_cli::commands::chart::{run_chart, ChartArgs};
use stockboard_cli::commands::investors::{run_investors, InvestorsArgs};
use stockboard_cli::commands::output::OutputFormat;
use stockboard_cli::commands::ranks::fetch_pages;
use stockboard_cli::commands::report::{run_report, ReportArgs};
use stockboard_core::{
    ChartConfig, InvestorFlowQuery, InvestorFlowRecord, RankedStock, RawDailyRecord, Sector,
    SectorCreate, SectorFilter, Stock, TradeDirection, TradePriceRankItem, TradePriceRankPage,
    TradeRankQuery,
};
use stockboard_data::{DataError, DataResult, MarketDataSource, ReportCoordinator};
use tokio::sync::Mutex;

/// 3페이지짜리 거래대금 상위, 고정 일봉, 순매도 12종목을 돌려주는 소스.
#[derive(Default)]
struct PagedSource {
    rank_requests: Mutex<Vec<Option<String>>>,
}

fn rank_item(code: &str, rank: usize) -> TradePriceRankItem {
    TradePriceRankItem {
        stock_code: code.to_string(),
        stock_name: code.to_string(),
        current_price: "1000".to_string(),
        price_sign: "3".to_string(),
        price_change: "0".to_string(),
        change_rate: "0.00".to_string(),
        volume: "10".to_string(),
        trading_value: "100".to_string(),
        current_rank: rank.to_string(),
        previous_rank: rank.to_string(),
    }
}

fn seller(code: &str, amount: i64) -> InvestorFlowRecord {
    InvestorFlowRecord {
        stock_code: code.to_string(),
        stock_name: code.to_string(),
        current_price: "1000".to_string(),
        price_sign: "5".to_string(),
        price_change: "-10".to_string(),
        change_rate: "-1.00".to_string(),
        net_quantity: (amount / 10).to_string(),
        net_amount: amount.to_string(),
        avg_acquisition_price: "1000".to_string(),
    }
}

fn daily(dt: &str, close: &str) -> RawDailyRecord {
    RawDailyRecord {
        date: dt.to_string(),
        open: "70000".to_string(),
        high: "72000".to_string(),
        low: "69000".to_string(),
        close: close.to_string(),
        volume: "1000".to_string(),
    }
}

#[async_trait]
impl MarketDataSource for PagedSource {
    async fn fetch_ranking_snapshot(&self, _day: NaiveDate) -> DataResult<Vec<RankedStock>> {
        Err(DataError::Network("offline".into()))
    }

    async fn fetch_investor_flow(
        &self,
        query: &InvestorFlowQuery,
    ) -> DataResult<Vec<InvestorFlowRecord>> {
        if query.direction != TradeDirection::NetSell {
            return Err(DataError::Network("offline".into()));
        }
        Ok((1..=12).map(|i| seller(&format!("S{:02}", i), -1000 * i)).collect())
    }

    async fn fetch_daily_chart(
        &self,
        _code: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> DataResult<Vec<RawDailyRecord>> {
        Ok(vec![
            daily("20240304", "+71000"),
            daily("20240305", "-70500"),
            daily("20240306", "71500"),
        ])
    }

    async fn fetch_trade_price_rank(&self, query: &TradeRankQuery) -> DataResult<TradePriceRankPage> {
        self.rank_requests.lock().await.push(query.next_key.clone());
        let page = match query.next_key.as_deref() {
            None => 1,
            Some("P2") => 2,
            Some(_) => 3,
        };
        Ok(TradePriceRankPage {
            items: vec![rank_item(&format!("S{}", page), page)],
            cont_yn: Some(if page < 3 { "Y" } else { "N" }.to_string()),
            next_key: (page < 3).then(|| format!("P{}", page + 1)),
        })
    }

    async fn fetch_stock_list(&self) -> DataResult<Vec<Stock>> {
        Ok(vec![])
    }

    async fn fetch_sector_list(&self, _filter: &SectorFilter) -> DataResult<Vec<Sector>> {
        Ok(vec![])
    }

    async fn fetch_sector_detail(&self, _code: &str) -> DataResult<Option<Sector>> {
        Ok(None)
    }

    async fn create_sector(&self, _request: &SectorCreate) -> DataResult<Sector> {
        Err(DataError::Unsupported("create".into()))
    }

    fn source_name(&self) -> &str {
        "paged"
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 8).unwrap()
}

#[tokio::test]
async fn ranks_follow_continuation_up_to_page_limit() {
    let source = PagedSource::default();

    let listing = fetch_pages(&source, TradeRankQuery::default(), 2).await.unwrap();
    assert_eq!(listing.pages, 2);
    assert_eq!(listing.items.len(), 2);
    assert!(listing.has_more);

    let all = fetch_pages(&source, TradeRankQuery::default(), 10).await.unwrap();
    assert_eq!(all.pages, 3);
    assert!(!all.has_more);
    assert_eq!(all.items[2].stock_code, "S3");

    let requests = source.rank_requests.lock().await;
    assert_eq!(requests[..2], [None, Some("P2".to_string())]);
}

#[tokio::test]
async fn investors_sell_ranks_largest_sellers_first() {
    let source = PagedSource::default();
    let args = InvestorsArgs {
        investor: "foreign".into(),
        direction: "sell".into(),
        segment: "kospi".into(),
        venue: "1".into(),
        start: None,
        end: None,
        top_n: 10,
        format: OutputFormat::Table,
    };

    let text = run_investors(&source, &args, today()).await.unwrap();
    assert!(text.contains("S12"));
    assert!(text.contains("S03"));
    assert!(!text.contains("S01"));
    assert!(!text.contains("S02"));
    assert!(text.contains("Total: 10 stocks"));

    let json = run_investors(
        &source,
        &InvestorsArgs {
            format: OutputFormat::Json,
            ..args
        },
        today(),
    )
    .await
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["stock_code"], "S12");
    assert_eq!(rows[9]["stock_code"], "S03");
}

#[tokio::test]
async fn report_renders_failed_sections() {
    let source: Arc<dyn MarketDataSource> = Arc::new(PagedSource::default());
    let coordinator = ReportCoordinator::new(source);
    let args = ReportArgs {
        start: Some("2024-03-04".into()),
        end: None,
        market: "all".into(),
        format: OutputFormat::Table,
    };

    let text = run_report(&coordinator, &args, today()).await.unwrap();
    assert!(text.contains("거래일: 0/5일"));
    assert_eq!(text.matches("데이터를 불러오지 못했습니다.").count(), 3);

    let json = run_report(
        &coordinator,
        &ReportArgs {
            format: OutputFormat::Json,
            ..args
        },
        today(),
    )
    .await
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["trading"]["failed"], 5);
    assert_eq!(value["request"]["market"], "all");
}

#[tokio::test]
async fn chart_renders_svg_from_daily_records() {
    let source = PagedSource::default();
    let args = ChartArgs {
        code: "005930".into(),
        period: "1w".into(),
        hover: Some(0),
    };

    let output = run_chart(&source, &args, &ChartConfig::default(), today())
        .await
        .unwrap();
    assert!(output.svg.contains("</svg>"));
    assert!(output.summary.contains("3개 캔들"));
    assert!(output.summary.contains("3/4 시70,000"));
}

#[tokio::test]
async fn chart_rejects_unknown_period() {
    let source = PagedSource::default();
    let args = ChartArgs {
        code: "005930".into(),
        period: "2Y".into(),
        hover: None,
    };
    assert!(run_chart(&source, &args, &ChartConfig::default(), today())
        .await
        .is_err());
}
