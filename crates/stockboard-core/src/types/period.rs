//! 차트 조회 기간 정의.

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// 차트 조회 기간 (1W, 1M, 3M, 6M, 1Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    /// 1주
    #[serde(rename = "1W")]
    W1,
    /// 1개월
    #[serde(rename = "1M")]
    M1,
    /// 3개월
    #[default]
    #[serde(rename = "3M")]
    M3,
    /// 6개월
    #[serde(rename = "6M")]
    M6,
    /// 1년
    #[serde(rename = "1Y")]
    Y1,
}

impl Period {
    /// 선택 가능한 모든 기간 (표시 순서).
    pub const ALL: [Period; 5] = [Period::W1, Period::M1, Period::M3, Period::M6, Period::Y1];

    /// 기간 태그 문자열.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::W1 => "1W",
            Period::M1 => "1M",
            Period::M3 => "3M",
            Period::M6 => "6M",
            Period::Y1 => "1Y",
        }
    }

    /// 월 단위 라벨(`YY/MM`)을 쓰는 장기 기간인지 여부.
    pub fn uses_month_labels(&self) -> bool {
        matches!(self, Period::Y1)
    }

    /// `end`에서 끝나는 조회 구간 `(start, end)`를 계산합니다.
    ///
    /// 1W는 7일 전, 나머지는 달력 기준 개월/연 단위로 거슬러 올라갑니다.
    /// 말일 보정은 chrono 규칙을 따릅니다 (3/31의 1개월 전은 2/28 또는 2/29).
    pub fn date_range(&self, end: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = match self {
            Period::W1 => end.checked_sub_signed(Duration::days(7)),
            Period::M1 => end.checked_sub_months(Months::new(1)),
            Period::M3 => end.checked_sub_months(Months::new(3)),
            Period::M6 => end.checked_sub_months(Months::new(6)),
            Period::Y1 => end.checked_sub_months(Months::new(12)),
        };
        (start.unwrap_or(NaiveDate::MIN), end)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1W" => Ok(Period::W1),
            "1M" => Ok(Period::M1),
            "3M" => Ok(Period::M3),
            "6M" => Ok(Period::M6),
            "1Y" => Ok(Period::Y1),
            other => Err(BoardError::Parse(format!(
                "Invalid period: {}. Supported: 1W, 1M, 3M, 6M, 1Y",
                other
            ))),
        }
    }
}
