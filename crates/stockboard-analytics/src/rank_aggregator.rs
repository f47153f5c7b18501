//! 다일(多日) 거래대금 순위 합산기.
//!
//! 거래일별 순위 스냅샷을 종목코드 기준으로 합쳐 기간 누적 리더보드를 만듭니다.
//!
//! # 예시
//!
//! ```rust,ignore
//! use stockboard_analytics::RankAggregator;
//!
//! let leaderboard = RankAggregator::new().aggregate(&snapshots);
//! for (i, stock) in leaderboard.iter().enumerate() {
//!     println!("{}. {} {}일 {}", i + 1, stock.stock_name, stock.days_count, stock.total_amount);
//! }
//! ```

use std::collections::HashMap;

use stockboard_core::{AggregatedStock, RankedStock};

/// 기본 상위 종목 수.
pub const DEFAULT_TOP_N: usize = 10;

/// 거래대금 순위 합산기.
#[derive(Debug, Clone, Copy)]
pub struct RankAggregator {
    top_n: usize,
}

impl Default for RankAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl RankAggregator {
    pub fn new() -> Self {
        Self { top_n: DEFAULT_TOP_N }
    }

    /// 상위 N개 제한을 지정합니다. 0이면 항상 빈 결과를 돌려줍니다.
    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// 스냅샷들을 합산하여 거래대금 합계 내림차순 상위 N개를 돌려줍니다.
    ///
    /// 합계가 같으면 먼저 등장한 종목이 앞에 옵니다. 현재가/등락률은
    /// 마지막으로 처리된 스냅샷의 값을 사용합니다.
    pub fn aggregate(&self, snapshots: &[Vec<RankedStock>]) -> Vec<AggregatedStock> {
        let mut index_by_code: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<AggregatedStock> = Vec::new();

        for stock in snapshots.iter().flatten() {
            match index_by_code.get(stock.stock_code.as_str()) {
                Some(&idx) => {
                    let entry = &mut entries[idx];
                    entry.total_amount = entry.total_amount.saturating_add(stock.trading_amount);
                    entry.days_count += 1;
                    entry.latest_price.clone_from(&stock.current_price);
                    entry.latest_change_rate.clone_from(&stock.change_rate);
                }
                None => {
                    index_by_code.insert(stock.stock_code.as_str(), entries.len());
                    entries.push(AggregatedStock {
                        stock_code: stock.stock_code.clone(),
                        stock_name: stock.stock_name.clone(),
                        total_amount: stock.trading_amount,
                        days_count: 1,
                        latest_price: stock.current_price.clone(),
                        latest_change_rate: stock.change_rate.clone(),
                    });
                }
            }
        }

        // 안정 정렬: 동률은 최초 등장 순서 유지
        entries.sort_by(|a, b| b.total_amount.cmp(&a.total_amount));
        entries.truncate(self.top_n);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(code: &str, amount: i64, price: &str) -> RankedStock {
        RankedStock {
            stock_code: code.to_string(),
            stock_name: format!("{}전자", code),
            trading_amount: amount,
            current_price: price.to_string(),
            change_rate: "+0.50".to_string(),
            current_rank: 1,
            previous_rank: 1,
        }
    }

    #[test]
    fn test_sums_across_days() {
        let snapshots = vec![vec![ranked("A", 100, "1000")], vec![ranked("A", 50, "1100")]];
        let result = RankAggregator::new().aggregate(&snapshots);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].total_amount, 150);
        assert_eq!(result[0].days_count, 2);
        assert_eq!(result[0].latest_price, "1100");
    }

    #[test]
    fn test_sorted_descending_and_capped() {
        let day: Vec<RankedStock> = (0..15)
            .map(|i| ranked(&format!("S{:02}", i), (i as i64 + 1) * 10, "100"))
            .collect();
        let result = RankAggregator::new().aggregate(&[day]);

        assert_eq!(result.len(), 10);
        assert_eq!(result[0].stock_code, "S14");
        assert!(result.windows(2).all(|w| w[0].total_amount >= w[1].total_amount));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let snapshots = vec![vec![ranked("B", 100, "1"), ranked("A", 100, "1")]];
        let result = RankAggregator::new().aggregate(&snapshots);
        assert_eq!(result[0].stock_code, "B");
        assert_eq!(result[1].stock_code, "A");
    }

    #[test]
    fn test_single_appearance_counts_one_day() {
        let snapshots = vec![
            vec![ranked("A", 10, "1")],
            vec![ranked("B", 5, "1")],
            vec![ranked("A", 10, "1")],
        ];
        let result = RankAggregator::new().aggregate(&snapshots);
        let b = result.iter().find(|s| s.stock_code == "B").unwrap();
        assert_eq!(b.days_count, 1);
    }

    #[test]
    fn test_empty_and_zero_top_n() {
        assert!(RankAggregator::new().aggregate(&[]).is_empty());
        assert!(RankAggregator::new().aggregate(&[vec![], vec![]]).is_empty());

        let snapshots = vec![vec![ranked("A", 10, "1")]];
        assert!(RankAggregator::with_top_n(0).aggregate(&snapshots).is_empty());
    }
}
