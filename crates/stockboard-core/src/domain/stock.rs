//! 종목 마스터.

use serde::{Deserialize, Serialize};

/// 종목 기본 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    /// 종목코드
    pub stock_code: String,
    /// 종목명
    pub stock_name: String,
    /// 시장 (KOSPI, KOSDAQ 등)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    /// 업종
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// 현재가
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
}

impl Stock {
    pub fn new(stock_code: impl Into<String>, stock_name: impl Into<String>) -> Self {
        Self {
            stock_code: stock_code.into(),
            stock_name: stock_name.into(),
            market: None,
            sector: None,
            current_price: None,
        }
    }

    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.current_price = Some(price);
        self
    }
}

/// 종목코드 또는 종목명으로 검색합니다 (대소문자 무시, 부분 일치).
///
/// 공백뿐인 검색어는 전체 목록을 그대로 돌려줍니다.
pub fn search_stocks<'a>(query: &str, stocks: &'a [Stock]) -> Vec<&'a Stock> {
    let query = query.trim();
    if query.is_empty() {
        return stocks.iter().collect();
    }

    let needle = query.to_lowercase();
    stocks
        .iter()
        .filter(|s| {
            s.stock_code.to_lowercase().contains(&needle)
                || s.stock_name.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Stock> {
        vec![
            Stock::new("005930", "삼성전자").with_market("KOSPI"),
            Stock::new("000660", "SK하이닉스").with_market("KOSPI"),
            Stock::new("035720", "카카오").with_market("KOSPI"),
        ]
    }

    #[test]
    fn test_search_by_code_and_name() {
        let stocks = sample();
        let hits = search_stocks("0006", &stocks);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].stock_name, "SK하이닉스");

        let hits = search_stocks("sk", &stocks);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].stock_code, "000660");

        assert_eq!(search_stocks("카카오", &stocks).len(), 1);
    }

    #[test]
    fn test_blank_query_returns_all() {
        let stocks = sample();
        assert_eq!(search_stocks("   ", &stocks).len(), 3);
    }

    #[test]
    fn test_optional_fields() {
        let stock: Stock =
            serde_json::from_str(r#"{"stock_code": "005930", "stock_name": "삼성전자"}"#).unwrap();
        assert!(stock.market.is_none());
        assert!(stock.current_price.is_none());
    }
}
