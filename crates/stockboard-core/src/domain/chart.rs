//! 일봉 차트 데이터.

use serde::{Deserialize, Serialize};

use crate::types::lenient::deserialize_string;

/// 원격 API가 돌려주는 일봉 한 건 (모든 값이 문자열).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDailyRecord {
    /// 일자 (YYYYMMDD)
    #[serde(rename = "dt")]
    pub date: String,
    /// 시가
    #[serde(rename = "open_pric", deserialize_with = "deserialize_string")]
    pub open: String,
    /// 고가
    #[serde(rename = "high_pric", deserialize_with = "deserialize_string")]
    pub high: String,
    /// 저가
    #[serde(rename = "low_pric", deserialize_with = "deserialize_string")]
    pub low: String,
    /// 종가 (현재가)
    #[serde(rename = "cur_prc", deserialize_with = "deserialize_string")]
    pub close: String,
    /// 거래량
    #[serde(rename = "trde_qty", deserialize_with = "deserialize_string")]
    pub volume: String,
}

/// 차트에 그릴 수 있는 캔들 하나.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// 표시용 날짜 라벨 (`M/D` 또는 `YY/MM`)
    pub date_label: String,
    pub open: i64,
    pub high: i64,
    pub low: i64,
    pub close: i64,
    pub volume: i64,
}

impl ChartPoint {
    /// 양봉 여부 (종가 ≥ 시가, 보합은 양봉으로 취급).
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_field_names() {
        let json = r#"{"dt": "20240115", "open_pric": "71000", "high_pric": "72000",
            "low_pric": "70500", "cur_prc": "-71500", "trde_qty": "10234567"}"#;
        let record: RawDailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, "20240115");
        assert_eq!(record.close, "-71500");
        assert_eq!(record.volume, "10234567");
    }

    #[test]
    fn test_flat_candle_counts_as_up() {
        let point = ChartPoint {
            date_label: "1/15".to_string(),
            open: 100,
            high: 100,
            low: 100,
            close: 100,
            volume: 0,
        };
        assert!(point.is_up());
    }
}
