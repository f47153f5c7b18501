//! 섹터(업종 분류) 데이터와 생성 요청 검증.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};

/// 섹터 정보.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub id: i64,
    /// 섹터 코드 (고유)
    pub code: String,
    /// 섹터명
    pub name: String,
    #[serde(default)]
    pub market: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// 계층 레벨 (1부터)
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub parent_id: Option<i64>,
    /// 소속 종목 수
    #[serde(default)]
    pub stock_count: Option<u32>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_level() -> u32 {
    1
}

fn default_active() -> bool {
    true
}

/// 섹터 목록 조회 조건.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorFilter {
    pub market: Option<String>,
    pub category: Option<String>,
    pub skip: Option<usize>,
    pub limit: Option<usize>,
}

impl SectorFilter {
    /// 쿼리 파라미터 목록 (지정된 조건만 포함).
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(market) = self.market.as_deref().filter(|m| !m.is_empty()) {
            params.push(("market", market.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            params.push(("category", category.to_string()));
        }
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    /// 주어진 섹터가 시장/카테고리 조건을 만족하는지 확인합니다.
    pub fn matches(&self, sector: &Sector) -> bool {
        let market_ok = match self.market.as_deref().filter(|m| !m.is_empty()) {
            Some(market) => sector.market.as_deref() == Some(market),
            None => true,
        };
        let category_ok = match self.category.as_deref().filter(|c| !c.is_empty()) {
            Some(category) => sector.category.as_deref() == Some(category),
            None => true,
        };
        market_ok && category_ok
    }
}

/// 섹터 생성 요청.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorCreate {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

impl SectorCreate {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            market: None,
            category: None,
            level: 1,
            parent_id: None,
        }
    }

    /// 필수 항목을 검증하고, 앞뒤 공백을 제거한 요청을 돌려줍니다.
    ///
    /// 빈 선택 항목은 `None`으로 바뀌며, 레벨 0은 1로 보정됩니다.
    pub fn validate(&self) -> BoardResult<Self> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(BoardError::InvalidInput("섹터 코드를 입력해주세요.".to_string()));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BoardError::InvalidInput("섹터명을 입력해주세요.".to_string()));
        }

        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            market: non_blank(self.market.as_deref()),
            category: non_blank(self.category.as_deref()),
            level: self.level.max(1),
            parent_id: self.parent_id,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
