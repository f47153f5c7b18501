//! 화면 표시용 숫자/금액 포맷.
//!
//! - 천 단위 콤마: `1,234,567`
//! - 금액 단위: 억(10^8), 만(10^4)
//! - 순위 변동(▲▼─)과 등락 방향

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockboard_core::types::lenient::parse_signed_int;

/// 천 단위 콤마를 넣은 정수 표기.
pub fn format_number(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 숫자 문자열을 콤마 표기로 바꿉니다. 해석할 수 없으면 원문 그대로.
pub fn format_number_str(value: &str) -> String {
    parse_signed_int(value)
        .map(format_number)
        .unwrap_or_else(|| value.to_string())
}

/// 만원 단위 금액 → `N억` (1억 이상) / `N만`.
pub fn format_flow_amount(ten_thousand_won: i64) -> String {
    let sign = if ten_thousand_won < 0 { "-" } else { "" };
    let abs = ten_thousand_won.unsigned_abs();
    if abs >= 10_000 {
        format!("{}{}억", sign, format_unsigned(abs / 10_000))
    } else {
        format!("{}{}만", sign, format_unsigned(abs))
    }
}

/// 백만원 단위 거래대금 → `N억` / `N만`.
pub fn format_trading_amount(million_won: i64) -> String {
    format_flow_amount(million_won.saturating_mul(100))
}

/// 원 단위 금액 → `A억 B만` / `A억` / `N만` / `N`.
pub fn format_won(won: i64) -> String {
    let sign = if won < 0 { "-" } else { "" };
    let abs = won.unsigned_abs();
    if abs >= 100_000_000 {
        let eok = abs / 100_000_000;
        let man = (abs % 100_000_000) / 10_000;
        if man > 0 {
            format!("{}{}억 {}만", sign, format_unsigned(eok), format_unsigned(man))
        } else {
            format!("{}{}억", sign, format_unsigned(eok))
        }
    } else if abs >= 10_000 {
        format!("{}{}만", sign, format_unsigned(abs / 10_000))
    } else {
        format_number(won)
    }
}

/// 원 단위 금액 문자열. 해석할 수 없으면 원문 그대로.
pub fn format_won_str(value: &str) -> String {
    parse_signed_int(value)
        .map(format_won)
        .unwrap_or_else(|| value.to_string())
}

fn format_unsigned(value: u64) -> String {
    format_number(i64::try_from(value).unwrap_or(i64::MAX))
}

/// 전일 대비 순위 변동.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RankChange {
    /// 순위 상승 (n계단)
    Up(u32),
    /// 순위 하락 (n계단)
    Down(u32),
    /// 변동 없음 또는 알 수 없음
    Flat,
}

impl RankChange {
    /// 현재/전일 순위 문자열로부터 변동을 계산합니다.
    pub fn between(now: &str, previous: &str) -> Self {
        match (parse_signed_int(now), parse_signed_int(previous)) {
            (Some(now), Some(previous)) => Self::from_ranks(now, previous),
            _ => RankChange::Flat,
        }
    }

    pub fn from_ranks(now: i64, previous: i64) -> Self {
        let diff = i128::from(previous) - i128::from(now);
        let steps = u32::try_from(diff.unsigned_abs()).unwrap_or(u32::MAX);
        match diff {
            d if d > 0 => RankChange::Up(steps),
            d if d < 0 => RankChange::Down(steps),
            _ => RankChange::Flat,
        }
    }

    /// `▲3`, `▼1`, `─`.
    pub fn symbol(&self) -> String {
        match self {
            RankChange::Up(n) => format!("▲{}", n),
            RankChange::Down(n) => format!("▼{}", n),
            RankChange::Flat => "─".to_string(),
        }
    }
}

/// 등락 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceDirection {
    Up,
    Down,
    Flat,
}

impl PriceDirection {
    /// 대비기호 코드 ('1' 상한, '2' 상승, '4' 하한, '5' 하락, 그 외 보합).
    pub fn from_sign_code(code: &str) -> Self {
        match code.trim() {
            "1" | "2" => PriceDirection::Up,
            "4" | "5" => PriceDirection::Down,
            _ => PriceDirection::Flat,
        }
    }

    /// 등락률 문자열의 부호로 판단합니다. 해석할 수 없으면 보합.
    pub fn from_rate(rate: &str) -> Self {
        let trimmed = rate.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        match Decimal::from_str(unsigned) {
            Ok(v) if v.is_sign_positive() && !v.is_zero() => PriceDirection::Up,
            Ok(v) if v.is_sign_negative() && !v.is_zero() => PriceDirection::Down,
            _ => PriceDirection::Flat,
        }
    }
}

/// 등락률 표시 (`+1.25%`, `-0.50%`, `0.00%`).
pub fn format_rate(rate: &str) -> String {
    let trimmed = rate.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    match Decimal::from_str(unsigned) {
        Ok(v) => {
            let v = v.round_dp(2);
            if v.is_sign_positive() && !v.is_zero() {
                format!("+{:.2}%", v)
            } else {
                format!("{:.2}%", v)
            }
        }
        Err(_) => format!("{}%", trimmed),
    }
}
