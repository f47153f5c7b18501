//! 고정소수점 문자열 필드를 위한 serde 헬퍼.
//!
//! 원격 API는 금액/수량을 숫자 문자열로 보내지만 일부 엔드포인트는 JSON 숫자를
//! 그대로 보냅니다. 두 형태를 모두 받아 정수로 변환합니다.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrString {
    Int(i64),
    Float(f64),
    Str(String),
}

/// 부호(`+`/`-`)와 앞뒤 공백, 천 단위 콤마를 허용하여 정수로 파싱합니다.
pub fn parse_signed_int(s: &str) -> Option<i64> {
    let cleaned: String = s.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<i64>().ok()
}

/// 숫자 또는 숫자 문자열을 `i64`로 역직렬화합니다. 빈 문자열은 0입니다.
pub fn deserialize_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumOrString::deserialize(deserializer)? {
        NumOrString::Int(v) => Ok(v),
        NumOrString::Float(v) => Ok(v.trunc() as i64),
        NumOrString::Str(s) if s.trim().is_empty() || s.trim() == "-" => Ok(0),
        NumOrString::Str(s) => {
            parse_signed_int(&s).ok_or_else(|| de::Error::custom(format!("Invalid integer: {}", s)))
        }
    }
}

/// 숫자 또는 숫자 문자열을 `u32`로 역직렬화합니다 (순위 필드용).
pub fn deserialize_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64(deserializer)?;
    u32::try_from(value).map_err(|_| de::Error::custom(format!("Out of range: {}", value)))
}

/// 숫자 또는 문자열 필드를 원문 그대로의 `String`으로 역직렬화합니다.
pub fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumOrString::deserialize(deserializer)? {
        NumOrString::Int(v) => v.to_string(),
        NumOrString::Float(v) => v.to_string(),
        NumOrString::Str(s) => s,
    })
}
