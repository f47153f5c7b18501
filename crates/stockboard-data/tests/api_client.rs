//! HTTP 클라이언트 통합 테스트 (mockito 서버).

use std::time::Duration;

use chrono::NaiveDate;
use mockito::{Matcher, Server};
use stockboard_core::{
    InvestorClass, InvestorFlowQuery, MarketSegment, SectorCreate, SectorFilter, TradeDirection,
    TradeRankQuery, Venue,
};
use stockboard_data::{ApiClient, DataError, MarketDataSource};

fn client(server: &Server) -> ApiClient {
    ApiClient::new(server.url(), Duration::from_secs(5)).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn ranking_snapshot_reads_wrapped_rankings() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/rank/trading-amount")
        .match_query(Matcher::UrlEncoded("base_dt".into(), "20240305".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"success": true, "data": {"rankings": [
                {"stock_code": "005930", "stock_name": "삼성전자", "trading_amount": "1523400",
                 "current_price": "71500", "change_rate": "+1.25", "current_rank": 1, "previous_rank": 2}
            ]}}"#,
        )
        .create_async()
        .await;

    let rankings = client(&server)
        .fetch_ranking_snapshot(date(2024, 3, 5))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].trading_amount, 1_523_400);
}

#[tokio::test]
async fn investor_flow_accepts_bare_and_wrapped_arrays() {
    let mut server = Server::new_async().await;
    let row = r#"{"stk_cd": "000660", "stk_nm": "SK하이닉스", "cur_prc": "182000", "pre_sig": "2",
        "pred_pre": "+3500", "pre_rt": "+1.96", "netslmt_qty": "+1000", "netslmt_amt": "+2000",
        "prsm_avg_pric": "181000"}"#;

    let kospi = server
        .mock("GET", "/api/v1/stock/investor-daily-trade")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("strt_dt".into(), "20240304".into()),
            Matcher::UrlEncoded("end_dt".into(), "20240308".into()),
            Matcher::UrlEncoded("trde_tp".into(), "2".into()),
            Matcher::UrlEncoded("mrkt_tp".into(), "001".into()),
            Matcher::UrlEncoded("invsr_tp".into(), "9000".into()),
            Matcher::UrlEncoded("stex_tp".into(), "3".into()),
        ]))
        .with_status(200)
        .with_body(format!("[{}]", row))
        .create_async()
        .await;
    let kosdaq = server
        .mock("GET", "/api/v1/stock/investor-daily-trade")
        .match_query(Matcher::UrlEncoded("mrkt_tp".into(), "101".into()))
        .with_status(200)
        .with_body(format!(r#"{{"success": true, "message": "ok", "data": [{}]}}"#, row))
        .create_async()
        .await;

    let api = client(&server);
    let mut query = InvestorFlowQuery {
        start: date(2024, 3, 4),
        end: date(2024, 3, 8),
        direction: TradeDirection::NetBuy,
        segment: MarketSegment::Kospi,
        investor: InvestorClass::Foreign,
        venue: Venue::Integrated,
    };
    let bare = api.fetch_investor_flow(&query).await.unwrap();
    query.segment = MarketSegment::Kosdaq;
    let wrapped = api.fetch_investor_flow(&query).await.unwrap();

    kospi.assert_async().await;
    kosdaq.assert_async().await;
    assert_eq!(bare.len(), 1);
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].net_amount, "+2000");
}

#[tokio::test]
async fn daily_chart_reads_items() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/chart/005930/day")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start_dt".into(), "20240101".into()),
            Matcher::UrlEncoded("end_dt".into(), "20240131".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"items": [
                {"dt": "20240102", "open_pric": "78200", "high_pric": "79800", "low_pric": "78200", "cur_prc": "-79600", "trde_qty": "17142847"},
                {"dt": "20240103", "open_pric": "78500", "high_pric": "78800", "low_pric": "77000", "cur_prc": "-77000", "trde_qty": "21753644"}
            ]}"#,
        )
        .create_async()
        .await;

    let records = client(&server)
        .fetch_daily_chart("005930", date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].close, "-77000");
}

#[tokio::test]
async fn daily_chart_missing_items_is_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", Matcher::Regex(r"^/api/v1/chart/.*/day".into()))
        .with_status(200)
        .with_body(r#"{"items": null}"#)
        .create_async()
        .await;

    let records = client(&server)
        .fetch_daily_chart("005930", date(2024, 1, 1), date(2024, 1, 31))
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn trade_price_rank_sends_continuation_keys() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/rank/trade-price")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("mrkt_tp".into(), "001".into()),
            Matcher::UrlEncoded("cont_yn".into(), "Y".into()),
            Matcher::UrlEncoded("next_key".into(), "K1".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"trde_prica_upper": [{"stk_cd": "005930", "stk_nm": "삼성전자", "now_rank": "11", "pred_rank": "9"}],
                "cont_yn": "N", "next_key": ""}"#,
        )
        .create_async()
        .await;

    let query = TradeRankQuery {
        market: stockboard_core::MarketType::Kospi,
        cont_yn: Some("Y".into()),
        next_key: Some("K1".into()),
        ..Default::default()
    };
    let page = client(&server).fetch_trade_price_rank(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.items.len(), 1);
    assert!(!page.has_more());
}

#[tokio::test]
async fn http_error_uses_body_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/stock/list")
        .with_status(500)
        .with_body(r#"{"success": false, "error": "upstream timeout"}"#)
        .create_async()
        .await;

    let err = client(&server).fetch_stock_list().await.unwrap_err();
    match err {
        DataError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream timeout");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn http_error_without_body_falls_back_to_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/stock/list")
        .with_status(503)
        .create_async()
        .await;

    let err = client(&server).fetch_stock_list().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.to_string(), "HTTP 503: API Error: 503");
}

#[tokio::test]
async fn success_false_is_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/stock/list")
        .with_status(200)
        .with_body(r#"{"success": false, "message": "점검 중", "data": null}"#)
        .create_async()
        .await;

    let err = client(&server).fetch_stock_list().await.unwrap_err();
    assert!(matches!(err, DataError::Api(msg) if msg == "점검 중"));
}

#[tokio::test]
async fn sector_list_sends_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/sector/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("category".into(), "IT".into()),
            Matcher::UrlEncoded("limit".into(), "1000".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"success": true, "message": "ok", "data": [
                {"id": 1, "code": "SEMI", "name": "반도체", "market": "KOSPI", "category": "IT",
                 "level": 1, "parent_id": null, "stock_count": 42, "is_active": true}
            ]}"#,
        )
        .create_async()
        .await;

    let filter = SectorFilter {
        category: Some("IT".into()),
        limit: Some(1000),
        ..Default::default()
    };
    let sectors = client(&server).fetch_sector_list(&filter).await.unwrap();

    mock.assert_async().await;
    assert_eq!(sectors[0].stock_count, Some(42));
}

#[tokio::test]
async fn sector_detail_not_found_is_none() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v1/sector/NONE")
        .with_status(404)
        .with_body(r#"{"message": "not found"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v1/sector/EMPTY")
        .with_status(200)
        .with_body(r#"{"success": true, "data": null}"#)
        .create_async()
        .await;

    let api = client(&server);
    assert!(api.fetch_sector_detail("NONE").await.unwrap().is_none());
    assert!(api.fetch_sector_detail("EMPTY").await.unwrap().is_none());
}

#[tokio::test]
async fn create_sector_posts_normalized_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v1/sector/create")
        .match_body(Matcher::Json(serde_json::json!({
            "code": "SHIP",
            "name": "조선",
            "level": 1
        })))
        .with_status(200)
        .with_body(
            r#"{"success": true, "data": {"id": 9, "code": "SHIP", "name": "조선", "level": 1, "is_active": true}}"#,
        )
        .create_async()
        .await;

    let mut request = SectorCreate::new(" SHIP ", "조선 ");
    request.market = Some("  ".into());
    let sector = client(&server).create_sector(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(sector.id, 9);
}

#[tokio::test]
async fn create_sector_validates_before_sending() {
    let server = Server::new_async().await;
    let err = client(&server)
        .create_sector(&SectorCreate::new("", "조선"))
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::InvalidInput(_)));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let api = ApiClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
    let err = api.fetch_stock_list().await.unwrap_err();
    assert!(matches!(err, DataError::Network(_)));
    assert!(err.is_retryable());
}
