//! 일봉 원본 레코드를 차트 포인트로 변환합니다.

use chrono::Datelike;
use stockboard_core::{parse_api_date, ChartPoint, Period, RawDailyRecord};

use crate::error::{AnalyticsError, AnalyticsResult};

/// 원본 레코드 목록을 같은 순서의 차트 포인트로 변환합니다.
///
/// 레코드 하나라도 해석에 실패하면 전체 변환이 실패합니다.
pub fn map_series(records: &[RawDailyRecord], period: Period) -> AnalyticsResult<Vec<ChartPoint>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| map_record(index, record, period))
        .collect()
}

fn map_record(index: usize, record: &RawDailyRecord, period: Period) -> AnalyticsResult<ChartPoint> {
    let date = parse_api_date(&record.date).map_err(|_| invalid(index, "date", &record.date))?;

    Ok(ChartPoint {
        date_label: date_label(date, period),
        open: parse_price(index, "open", &record.open)?,
        high: parse_price(index, "high", &record.high)?,
        low: parse_price(index, "low", &record.low)?,
        close: parse_price(index, "close", &record.close)?,
        volume: parse_price(index, "volume", &record.volume)?,
    })
}

/// 기간에 맞는 날짜 라벨 (1Y: `YY/MM`, 그 외: `M/D`).
pub fn date_label(date: chrono::NaiveDate, period: Period) -> String {
    if period.uses_month_labels() {
        format!("{:02}/{:02}", date.year() % 100, date.month())
    } else {
        format!("{}/{}", date.month(), date.day())
    }
}

/// 부호 문자를 떼고 크기만 정수로 해석합니다 (예: "-71500" → 71500).
fn parse_price(index: usize, field: &'static str, value: &str) -> AnalyticsResult<i64> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(index, field, value));
    }
    digits.parse::<i64>().map_err(|_| invalid(index, field, value))
}

fn invalid(index: usize, field: &'static str, value: &str) -> AnalyticsError {
    AnalyticsError::InvalidRecord {
        index,
        field,
        value: value.to_string(),
    }
}
