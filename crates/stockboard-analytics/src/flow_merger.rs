//! 투자자별 순매매 병합기.
//!
//! 시장(KOSPI/KOSDAQ)별로 따로 조회한 순매매 상위 목록을 종목코드 기준으로
//! 합쳐 순매매 금액 내림차순 리더보드를 만듭니다.

use std::collections::HashMap;

use stockboard_core::types::lenient::parse_signed_int;
use stockboard_core::{InvestorFlowRecord, MergedFlowRecord, TradeDirection};
use tracing::debug;

use crate::rank_aggregator::DEFAULT_TOP_N;

/// 순매매 목록 병합기.
#[derive(Debug, Clone, Copy)]
pub struct InvestorFlowMerger {
    top_n: usize,
}

impl Default for InvestorFlowMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl InvestorFlowMerger {
    pub fn new() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }

    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }

    /// 목록들을 병합합니다 (순매수 기준, 금액 내림차순).
    ///
    /// 금액/수량은 정수로 합산하며, 해석할 수 없는 값은 0으로 취급합니다.
    /// 표시용 필드는 입력 순서상 마지막 레코드의 값을 따릅니다.
    pub fn merge(&self, lists: &[Vec<InvestorFlowRecord>]) -> Vec<MergedFlowRecord> {
        let mut merged = combine(lists);
        merged.sort_by(|a, b| b.net_amount.cmp(&a.net_amount));
        merged.truncate(self.top_n);
        merged
    }

    /// 순매도 상위: 금액 오름차순 (가장 많이 판 종목이 먼저).
    pub fn merge_sellers(&self, lists: &[Vec<InvestorFlowRecord>]) -> Vec<MergedFlowRecord> {
        let mut merged = combine(lists);
        merged.sort_by(|a, b| a.net_amount.cmp(&b.net_amount));
        merged.truncate(self.top_n);
        merged
    }

    /// 매매 구분에 맞는 정렬로 병합합니다.
    pub fn merge_for(
        &self,
        direction: TradeDirection,
        lists: &[Vec<InvestorFlowRecord>],
    ) -> Vec<MergedFlowRecord> {
        match direction {
            TradeDirection::NetBuy => self.merge(lists),
            TradeDirection::NetSell => self.merge_sellers(lists),
        }
    }
}

/// 종목코드 기준 합산 (첫 등장 순서 유지).
fn combine(lists: &[Vec<InvestorFlowRecord>]) -> Vec<MergedFlowRecord> {
    let mut index_by_code: HashMap<&str, usize> = HashMap::new();
    let mut merged: Vec<MergedFlowRecord> = Vec::new();

    for record in lists.iter().flatten() {
        let amount = parse_or_zero(&record.stock_code, "netslmt_amt", &record.net_amount);
        let quantity = parse_or_zero(&record.stock_code, "netslmt_qty", &record.net_quantity);

        match index_by_code.get(record.stock_code.as_str()) {
            Some(&idx) => {
                let entry = &mut merged[idx];
                entry.net_amount = entry.net_amount.saturating_add(amount);
                entry.net_quantity = entry.net_quantity.saturating_add(quantity);
                overwrite_display(entry, record);
            }
            None => {
                index_by_code.insert(record.stock_code.as_str(), merged.len());
                merged.push(MergedFlowRecord {
                    stock_code: record.stock_code.clone(),
                    stock_name: record.stock_name.clone(),
                    current_price: record.current_price.clone(),
                    price_sign: record.price_sign.clone(),
                    price_change: record.price_change.clone(),
                    change_rate: record.change_rate.clone(),
                    net_quantity: quantity,
                    net_amount: amount,
                    avg_acquisition_price: record.avg_acquisition_price.clone(),
                });
            }
        }
    }

    merged
}

fn overwrite_display(entry: &mut MergedFlowRecord, record: &InvestorFlowRecord) {
    entry.stock_name.clone_from(&record.stock_name);
    entry.current_price.clone_from(&record.current_price);
    entry.price_sign.clone_from(&record.price_sign);
    entry.price_change.clone_from(&record.price_change);
    entry.change_rate.clone_from(&record.change_rate);
    entry.avg_acquisition_price.clone_from(&record.avg_acquisition_price);
}

fn parse_or_zero(code: &str, field: &str, value: &str) -> i64 {
    match parse_signed_int(value) {
        Some(v) => v,
        None => {
            debug!(stock_code = code, field, value, "순매매 값 해석 실패, 0으로 처리");
            0
        }
    }
}
