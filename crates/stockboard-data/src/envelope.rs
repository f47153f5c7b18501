//! 응답 봉투(envelope) 정규화.
//!
//! 원격 API는 엔드포인트마다 응답 형태가 다릅니다:
//! - 값 그대로: `[...]`, `{"items": [...]}`
//! - 래핑: `{"success": true, "message": "...", "data": ..., "error": null}`
//!
//! 어댑터 경계에서 두 형태를 하나의 `ApiEnvelope<T>`로 통일합니다.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{DataError, DataResult};

const WRAPPER_KEYS: [&str; 3] = ["success", "data", "error"];

/// 정규화된 응답.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T: DeserializeOwned> ApiEnvelope<T> {
    /// 응답 본문을 파싱합니다.
    pub fn from_body(body: &str) -> DataResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// JSON 값을 정규화합니다.
    pub fn from_value(value: Value) -> DataResult<Self> {
        if value.is_null() {
            return Ok(Self::bare(None));
        }
        if is_wrapped(&value) {
            return Ok(serde_json::from_value(value)?);
        }
        Ok(Self::bare(Some(serde_json::from_value(value)?)))
    }
}

impl<T> ApiEnvelope<T> {
    fn bare(data: Option<T>) -> Self {
        Self {
            success: None,
            message: None,
            data,
            error: None,
        }
    }

    /// 페이로드를 꺼냅니다. `success == false`이면 에러입니다.
    pub fn into_data(self) -> DataResult<Option<T>> {
        if self.success == Some(false) {
            let reason = self
                .error
                .filter(|e| !e.is_empty())
                .or(self.message)
                .unwrap_or_else(|| "요청이 실패했습니다.".to_string());
            return Err(DataError::Api(reason));
        }
        Ok(self.data)
    }
}

fn is_wrapped(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|obj| WRAPPER_KEYS.iter().any(|key| obj.contains_key(*key)))
}

/// 에러 응답 본문에서 사용자에게 보여줄 메시지를 뽑습니다.
///
/// `error` → `message` 순으로 찾고, 없으면 `API Error: {status}`.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"].iter().find_map(|key| {
                value
                    .get(*key)
                    .and_then(Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
        })
        .unwrap_or_else(|| format!("API Error: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        code: String,
    }

    #[test]
    fn test_bare_array() {
        let envelope = ApiEnvelope::<Vec<Item>>::from_body(r#"[{"code": "A"}]"#).unwrap();
        assert_eq!(envelope.into_data().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_wrapped_array() {
        let body = r#"{"success": true, "message": "ok", "data": [{"code": "A"}, {"code": "B"}]}"#;
        let data = ApiEnvelope::<Vec<Item>>::from_body(body).unwrap().into_data().unwrap();
        assert_eq!(data.unwrap().len(), 2);
    }

    #[test]
    fn test_wrapped_null_data() {
        let body = r#"{"success": true, "message": "empty", "data": null}"#;
        let data = ApiEnvelope::<Vec<Item>>::from_body(body).unwrap().into_data().unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_bare_object_is_not_mistaken_for_wrapper() {
        let data = ApiEnvelope::<Item>::from_body(r#"{"code": "SEMI"}"#)
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(data, Some(Item { code: "SEMI".into() }));
    }

    #[test]
    fn test_failure_uses_error_then_message() {
        let body = r#"{"success": false, "message": "실패", "data": null, "error": "코드 중복"}"#;
        let err = ApiEnvelope::<Item>::from_body(body).unwrap().into_data().unwrap_err();
        assert!(matches!(err, DataError::Api(msg) if msg == "코드 중복"));

        let body = r#"{"success": false, "message": "실패"}"#;
        let err = ApiEnvelope::<Item>::from_body(body).unwrap().into_data().unwrap_err();
        assert!(matches!(err, DataError::Api(msg) if msg == "실패"));
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(400, r#"{"error": "bad code"}"#), "bad code");
        assert_eq!(error_message(500, r#"{"message": "boom"}"#), "boom");
        assert_eq!(error_message(502, "<html>"), "API Error: 502");
        assert_eq!(error_message(404, r#"{"detail": "x"}"#), "API Error: 404");
    }
}
