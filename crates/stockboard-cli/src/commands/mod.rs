//! CLI 명령어 구현 모듈.

pub mod chart;
pub mod investors;
pub mod output;
pub mod ranks;
pub mod report;
pub mod sectors;
pub mod stocks;

use anyhow::{bail, Context, Result};
use chrono::{Duration, NaiveDate};
use stockboard_core::parse_input_date;

/// 리포트 기본 조회 기간 (일).
pub const REPORT_WINDOW_DAYS: i64 = 7;

/// 입력된 시작/종료일을 해석합니다.
///
/// 종료일이 없으면 `today`, 시작일이 없으면 종료일 `window_days`일 전입니다.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
    window_days: i64,
) -> Result<(NaiveDate, NaiveDate)> {
    let end = match end {
        Some(s) => parse_input_date(s).with_context(|| format!("잘못된 종료일: {}", s))?,
        None => today,
    };
    let start = match start {
        Some(s) => parse_input_date(s).with_context(|| format!("잘못된 시작일: {}", s))?,
        None => end - Duration::days(window_days),
    };
    if start > end {
        bail!("시작일({})이 종료일({})보다 늦습니다", start, end);
    }
    Ok((start, end))
}
