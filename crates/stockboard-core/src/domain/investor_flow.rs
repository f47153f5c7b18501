//! 투자자별 순매매 데이터.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::lenient::deserialize_string;
use crate::types::{to_api_date, InvestorClass, MarketSegment, TradeDirection, Venue};

/// 투자자별 일별 매매 상위 한 종목.
///
/// 금액/수량은 원문 문자열 그대로 보관하며, 합산 시점에 정수로 해석합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorFlowRecord {
    /// 종목코드 (식별 키)
    #[serde(rename = "stk_cd")]
    pub stock_code: String,
    /// 종목명
    #[serde(rename = "stk_nm")]
    pub stock_name: String,
    /// 현재가
    #[serde(rename = "cur_prc", default, deserialize_with = "deserialize_string")]
    pub current_price: String,
    /// 대비기호
    #[serde(rename = "pre_sig", default, deserialize_with = "deserialize_string")]
    pub price_sign: String,
    /// 전일대비
    #[serde(rename = "pred_pre", default, deserialize_with = "deserialize_string")]
    pub price_change: String,
    /// 전일대비 등락률
    #[serde(rename = "pre_rt", default, deserialize_with = "deserialize_string")]
    pub change_rate: String,
    /// 순매매 수량 (주, 부호 포함)
    #[serde(rename = "netslmt_qty", default, deserialize_with = "deserialize_string")]
    pub net_quantity: String,
    /// 순매매 금액 (만원, 부호 포함)
    #[serde(rename = "netslmt_amt", default, deserialize_with = "deserialize_string")]
    pub net_amount: String,
    /// 추정 평균 취득가
    #[serde(rename = "prsm_avg_pric", default, deserialize_with = "deserialize_string")]
    pub avg_acquisition_price: String,
}

/// 여러 조회 결과를 종목 단위로 합친 순매매 기록.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedFlowRecord {
    pub stock_code: String,
    pub stock_name: String,
    pub current_price: String,
    pub price_sign: String,
    pub price_change: String,
    pub change_rate: String,
    /// 순매매 수량 합계
    pub net_quantity: i64,
    /// 순매매 금액 합계 (만원)
    pub net_amount: i64,
    pub avg_acquisition_price: String,
}

/// 투자자별 일별 매매 조회 파라미터.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestorFlowQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub direction: TradeDirection,
    pub segment: MarketSegment,
    pub investor: InvestorClass,
    pub venue: Venue,
}

impl InvestorFlowQuery {
    /// 쿼리 파라미터 목록.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("strt_dt", to_api_date(self.start)),
            ("end_dt", to_api_date(self.end)),
            ("trde_tp", self.direction.code().to_string()),
            ("mrkt_tp", self.segment.code().to_string()),
            ("invsr_tp", self.investor.code().to_string()),
            ("stex_tp", self.venue.code().to_string()),
        ]
    }
}
