//! 거래대금 순위 데이터.
//!
//! - `RankedStock` - 하루치 거래대금 순위 스냅샷의 한 행
//! - `AggregatedStock` - 여러 거래일 스냅샷을 합산한 리더보드 행
//! - `TradePriceRankItem` / `TradePriceRankPage` - 실시간 거래대금 상위 (연속조회)

use serde::{Deserialize, Serialize};

use crate::types::lenient::{deserialize_i64, deserialize_string, deserialize_u32};
use crate::types::{MarketType, Venue};

/// 일자별 거래대금 순위 스냅샷의 한 종목.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedStock {
    /// 종목코드 (식별 키)
    pub stock_code: String,
    /// 종목명
    pub stock_name: String,
    /// 거래대금 (백만원)
    #[serde(deserialize_with = "deserialize_i64")]
    pub trading_amount: i64,
    /// 현재가
    #[serde(deserialize_with = "deserialize_string")]
    pub current_price: String,
    /// 등락률 (%)
    #[serde(deserialize_with = "deserialize_string")]
    pub change_rate: String,
    /// 당일 순위 (1부터)
    #[serde(deserialize_with = "deserialize_u32")]
    pub current_rank: u32,
    /// 전일 순위
    #[serde(deserialize_with = "deserialize_u32")]
    pub previous_rank: u32,
}

/// 여러 거래일에 걸친 거래대금 합산 결과.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedStock {
    pub stock_code: String,
    pub stock_name: String,
    /// 관측된 날들의 거래대금 합계 (백만원)
    pub total_amount: i64,
    /// 순위권에 등장한 일수
    pub days_count: u32,
    /// 마지막으로 처리된 스냅샷의 현재가
    pub latest_price: String,
    /// 마지막으로 처리된 스냅샷의 등락률
    pub latest_change_rate: String,
}

/// 실시간 거래대금 상위 한 행.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePriceRankItem {
    /// 종목코드
    #[serde(rename = "stk_cd")]
    pub stock_code: String,
    /// 종목명
    #[serde(rename = "stk_nm")]
    pub stock_name: String,
    /// 현재가 (부호 포함 가능)
    #[serde(rename = "cur_prc", default)]
    pub current_price: String,
    /// 전일대비 기호 (1: 상한, 2: 상승, 3: 보합, 4: 하한, 5: 하락)
    #[serde(rename = "pred_pre_sig", default)]
    pub price_sign: String,
    /// 전일대비
    #[serde(rename = "pred_pre", default)]
    pub price_change: String,
    /// 등락률
    #[serde(rename = "flu_rt", default)]
    pub change_rate: String,
    /// 현재 거래량
    #[serde(rename = "now_trde_qty", default)]
    pub volume: String,
    /// 거래대금
    #[serde(rename = "trde_prica", default)]
    pub trading_value: String,
    /// 현재 순위
    #[serde(rename = "now_rank", default)]
    pub current_rank: String,
    /// 전일 순위
    #[serde(rename = "pred_rank", default)]
    pub previous_rank: String,
}

/// 거래대금 상위 조회 결과 한 페이지.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradePriceRankPage {
    #[serde(rename = "trde_prica_upper", default)]
    pub items: Vec<TradePriceRankItem>,
    /// 연속조회 여부 ("Y"면 다음 페이지 존재)
    #[serde(default)]
    pub cont_yn: Option<String>,
    /// 연속조회 키
    #[serde(default)]
    pub next_key: Option<String>,
}

impl TradePriceRankPage {
    /// 다음 페이지를 조회할 수 있는지 여부.
    pub fn has_more(&self) -> bool {
        self.cont_yn.as_deref() == Some("Y")
            && self.next_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// 거래대금 상위 조회 파라미터.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeRankQuery {
    pub market: MarketType,
    /// 관리종목 포함 여부
    pub include_managed: bool,
    pub venue: Venue,
    /// 연속조회 (이전 페이지의 `cont_yn`)
    pub cont_yn: Option<String>,
    /// 연속조회 키 (이전 페이지의 `next_key`)
    pub next_key: Option<String>,
}

impl TradeRankQuery {
    /// 이전 페이지 응답으로부터 다음 페이지 조회 파라미터를 만듭니다.
    pub fn next_page(&self, page: &TradePriceRankPage) -> Option<Self> {
        if !page.has_more() {
            return None;
        }
        Some(Self {
            cont_yn: page.cont_yn.clone(),
            next_key: page.next_key.clone(),
            ..self.clone()
        })
    }

    /// 쿼리 파라미터 목록.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("mrkt_tp", self.market.code().to_string()),
            (
                "mang_stk_incls",
                if self.include_managed { "1" } else { "0" }.to_string(),
            ),
            ("stex_tp", self.venue.code().to_string()),
        ];
        if let Some(cont_yn) = &self.cont_yn {
            params.push(("cont_yn", cont_yn.clone()));
        }
        if let Some(next_key) = &self.next_key {
            params.push(("next_key", next_key.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_stock_accepts_numeric_and_string_fields() {
        let json = r#"{
            "stock_code": "005930",
            "stock_name": "삼성전자",
            "trading_amount": "1523400",
            "current_price": 71500,
            "change_rate": "+1.25",
            "current_rank": 1,
            "previous_rank": "2"
        }"#;
        let stock: RankedStock = serde_json::from_str(json).unwrap();
        assert_eq!(stock.trading_amount, 1_523_400);
        assert_eq!(stock.current_price, "71500");
        assert_eq!(stock.previous_rank, 2);
    }

    #[test]
    fn test_trade_rank_page_continuation() {
        let json = r#"{
            "trde_prica_upper": [{"stk_cd": "005930", "stk_nm": "삼성전자", "now_rank": "1", "pred_rank": "3"}],
            "cont_yn": "Y",
            "next_key": "K1"
        }"#;
        let page: TradePriceRankPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 1);
        assert!(page.has_more());

        let query = TradeRankQuery::default();
        let next = query.next_page(&page).unwrap();
        assert_eq!(next.next_key.as_deref(), Some("K1"));
        assert!(next
            .to_params()
            .contains(&("cont_yn", "Y".to_string())));
    }

    #[test]
    fn test_last_page_has_no_continuation() {
        let page = TradePriceRankPage {
            items: vec![],
            cont_yn: Some("N".to_string()),
            next_key: Some("K2".to_string()),
        };
        assert!(!page.has_more());
        assert!(TradeRankQuery::default().next_page(&page).is_none());
    }

    #[test]
    fn test_default_params() {
        let params = TradeRankQuery::default().to_params();
        assert_eq!(
            params,
            vec![
                ("mrkt_tp", "000".to_string()),
                ("mang_stk_incls", "0".to_string()),
                ("stex_tp", "1".to_string()),
            ]
        );
    }
}
