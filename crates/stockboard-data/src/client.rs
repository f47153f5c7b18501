//! 시세 API HTTP 클라이언트.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use stockboard_data::ApiClient;
//!
//! let client = ApiClient::new("http://localhost:8000", Duration::from_secs(10))?;
//! let stocks = client.fetch_stock_list().await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stockboard_core::{
    to_api_date, ApiConfig, InvestorFlowQuery, InvestorFlowRecord, RankedStock, RawDailyRecord,
    Sector, SectorCreate, SectorFilter, Stock, TradePriceRankPage, TradeRankQuery,
};
use tracing::{debug, error};

use crate::envelope::{error_message, ApiEnvelope};
use crate::error::{DataError, DataResult};
use crate::source::MarketDataSource;

/// 거래대금 순위 응답 (`data.rankings`).
#[derive(Debug, Default, Deserialize)]
struct RankingPayload {
    #[serde(default)]
    rankings: Vec<RankedStock>,
}

/// 일봉 응답 (`items`).
#[derive(Debug, Default, Deserialize)]
struct ChartPayload {
    #[serde(default)]
    items: Option<Vec<RawDailyRecord>>,
}

/// 시세 API 클라이언트.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// 클라이언트 생성.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> DataResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Network(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// 설정으로부터 클라이언트 생성.
    pub fn from_config(config: &ApiConfig) -> DataResult<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> DataResult<ApiEnvelope<T>> {
        let url = self.url(path);
        debug!(url = %url, ?params, "API 요청");

        let response = self
            .client
            .get(&url)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::read_envelope(path, response).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> DataResult<ApiEnvelope<T>> {
        let url = self.url(path);
        debug!(url = %url, "API 요청 (POST)");

        let response = self.client.post(&url).json(body).send().await?;

        Self::read_envelope(path, response).await
    }

    async fn read_envelope<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> DataResult<ApiEnvelope<T>> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(status.as_u16(), &text);
            error!(path, status = status.as_u16(), %message, "API 에러 응답");
            return Err(DataError::Http {
                status: status.as_u16(),
                message,
            });
        }

        ApiEnvelope::from_body(&text).map_err(|e| {
            error!(path, error = %e, body = %text, "응답 파싱 실패");
            e
        })
    }
}

/// 경로에 들어갈 코드 값 검증.
fn path_segment<'a>(kind: &str, value: &'a str) -> DataResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(DataError::InvalidInput(format!("잘못된 {}: {:?}", kind, value)));
    }
    Ok(trimmed)
}

#[async_trait]
impl MarketDataSource for ApiClient {
    async fn fetch_ranking_snapshot(&self, date: NaiveDate) -> DataResult<Vec<RankedStock>> {
        let payload = self
            .get::<RankingPayload>("/api/v1/rank/trading-amount", &[("base_dt", to_api_date(date))])
            .await?
            .into_data()?;
        Ok(payload.unwrap_or_default().rankings)
    }

    async fn fetch_investor_flow(
        &self,
        query: &InvestorFlowQuery,
    ) -> DataResult<Vec<InvestorFlowRecord>> {
        let data = self
            .get::<Vec<InvestorFlowRecord>>("/api/v1/stock/investor-daily-trade", &query.to_params())
            .await?
            .into_data()?;
        Ok(data.unwrap_or_default())
    }

    async fn fetch_daily_chart(
        &self,
        code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DataResult<Vec<RawDailyRecord>> {
        let code = path_segment("종목코드", code)?;
        let path = format!("/api/v1/chart/{}/day", code);
        let params = [("start_dt", to_api_date(start)), ("end_dt", to_api_date(end))];
        let payload = self.get::<ChartPayload>(&path, &params).await?.into_data()?;
        Ok(payload.and_then(|p| p.items).unwrap_or_default())
    }

    async fn fetch_trade_price_rank(&self, query: &TradeRankQuery) -> DataResult<TradePriceRankPage> {
        let page = self
            .get::<TradePriceRankPage>("/api/v1/rank/trade-price", &query.to_params())
            .await?
            .into_data()?;
        Ok(page.unwrap_or_default())
    }

    async fn fetch_stock_list(&self) -> DataResult<Vec<Stock>> {
        let data = self
            .get::<Vec<Stock>>("/api/v1/stock/list", &[])
            .await?
            .into_data()?;
        Ok(data.unwrap_or_default())
    }

    async fn fetch_sector_list(&self, filter: &SectorFilter) -> DataResult<Vec<Sector>> {
        let data = self
            .get::<Vec<Sector>>("/api/v1/sector/list", &filter.to_params())
            .await?
            .into_data()?;
        Ok(data.unwrap_or_default())
    }

    async fn fetch_sector_detail(&self, code: &str) -> DataResult<Option<Sector>> {
        let code = path_segment("섹터 코드", code)?;
        let path = format!("/api/v1/sector/{}", code);
        match self.get::<Sector>(&path, &[]).await {
            Ok(envelope) => envelope.into_data(),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create_sector(&self, request: &SectorCreate) -> DataResult<Sector> {
        let request = request.validate()?;
        self.post::<SectorCreate, Sector>("/api/v1/sector/create", &request)
            .await?
            .into_data()?
            .ok_or_else(|| DataError::Api("섹터 생성에 실패했습니다.".to_string()))
    }

    fn source_name(&self) -> &str {
        "api"
    }
}
