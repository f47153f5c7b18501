//! 날짜 인코딩 및 거래일 계산.
//!
//! 원격 API와 주고받는 날짜는 모두 8자리 `YYYYMMDD` 문자열입니다.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{BoardError, BoardResult};

/// API 날짜 형식.
pub const API_DATE_FORMAT: &str = "%Y%m%d";

/// 날짜를 `YYYYMMDD`로 인코딩합니다.
pub fn to_api_date(date: NaiveDate) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

/// `YYYYMMDD` 문자열을 날짜로 파싱합니다.
///
/// 정확히 8자리 숫자이면서 달력상 존재하는 날짜여야 합니다.
pub fn parse_api_date(s: &str) -> BoardResult<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BoardError::Parse(format!(
            "Invalid date: {:?} (expected YYYYMMDD)",
            s
        )));
    }
    NaiveDate::parse_from_str(s, API_DATE_FORMAT)
        .map_err(|e| BoardError::Parse(format!("Invalid date: {:?} ({})", s, e)))
}

/// CLI 입력 날짜를 파싱합니다 (`YYYY-MM-DD` 또는 `YYYYMMDD`).
pub fn parse_input_date(s: &str) -> BoardResult<NaiveDate> {
    let s = s.trim();
    if s.contains('-') {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            BoardError::Parse(format!("Invalid date: {} (expected YYYY-MM-DD): {}", s, e))
        })
    } else {
        parse_api_date(s)
    }
}

/// 주말 여부.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `start`~`end` 사이의 평일 목록 (최신순, 최대 `max`개).
///
/// 공휴일은 고려하지 않습니다. 휴장일 조회는 빈 스냅샷 또는 실패로 돌아오며
/// 집계 단계에서 자연스럽게 빠집니다.
pub fn business_days_between(start: NaiveDate, end: NaiveDate, max: usize) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut cur = end;
    while cur >= start && days.len() < max {
        if !is_weekend(cur) {
            days.push(cur);
        }
        match cur.checked_sub_signed(Duration::days(1)) {
            Some(prev) => cur = prev,
            None => break,
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_api_date_round_trip() {
        let d = date(2024, 1, 5);
        assert_eq!(to_api_date(d), "20240105");
        assert_eq!(parse_api_date("20240105").unwrap(), d);
    }

    #[test]
    fn test_parse_api_date_rejects_malformed() {
        assert!(parse_api_date("2024015").is_err());
        assert!(parse_api_date("2024-1-05").is_err());
        assert!(parse_api_date("20241301").is_err());
        assert!(parse_api_date("20240230").is_err());
        assert!(parse_api_date("").is_err());
    }

    #[test]
    fn test_parse_input_date_accepts_both_forms() {
        assert_eq!(parse_input_date("2024-03-08").unwrap(), date(2024, 3, 8));
        assert_eq!(parse_input_date("20240308").unwrap(), date(2024, 3, 8));
        assert!(parse_input_date("03/08/2024").is_err());
    }

    #[test]
    fn test_business_days_skip_weekends_newest_first() {
        // 2024-03-04 (월) ~ 2024-03-12 (화)
        let days = business_days_between(date(2024, 3, 4), date(2024, 3, 12), 20);
        assert_eq!(
            days,
            vec![
                date(2024, 3, 12),
                date(2024, 3, 11),
                date(2024, 3, 8),
                date(2024, 3, 7),
                date(2024, 3, 6),
                date(2024, 3, 5),
                date(2024, 3, 4),
            ]
        );
    }

    #[test]
    fn test_business_days_capped() {
        let days = business_days_between(date(2023, 1, 1), date(2024, 3, 12), 20);
        assert_eq!(days.len(), 20);
        assert_eq!(days[0], date(2024, 3, 12));
    }

    #[test]
    fn test_business_days_empty_when_reversed_or_weekend_only() {
        assert!(business_days_between(date(2024, 3, 12), date(2024, 3, 4), 20).is_empty());
        assert!(business_days_between(date(2024, 3, 9), date(2024, 3, 10), 20).is_empty());
    }
}
