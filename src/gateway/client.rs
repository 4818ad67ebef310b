//! 원격 인사이트 게이트웨이 클라이언트
//!
//! 사용자 동작 하나당 외부 생성형 완성 서비스에 요청 하나를 보낸다.
//! 프롬프트와 응답 스키마를 싣고, 돌려받은 텍스트를 JSON으로 해석해
//! 타입 있는 모델로 만든다. 재시도는 하지 않으며, 실패는 기능별
//! 안내 문구 하나로 변환된다. 부분 결과는 받지 않는다.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::error::InsightError;
use crate::gateway::{prompts, schema};
use crate::models::insight::{
    InvestmentProjection, KeywordTrend, MarketTrend, MomentumStock, ScreenedCompany,
    ScreeningCriteria, SectorAnalysis, StockDetailInfo, TechnicalAnalysis, TopPicksAnalysis,
};
use crate::models::position::Position;

/// 분석 기능별 게이트웨이 연산
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InsightGateway: Send + Sync {
    async fn keyword_trends(&self) -> Result<Vec<KeywordTrend>, InsightError>;

    async fn market_trends(&self) -> Result<Vec<MarketTrend>, InsightError>;

    async fn analyze_sector(&self, sector: &str) -> Result<SectorAnalysis, InsightError>;

    async fn screen_companies(
        &self,
        criteria: &ScreeningCriteria,
    ) -> Result<Vec<ScreenedCompany>, InsightError>;

    async fn momentum_stocks(&self, market: &str) -> Result<Vec<MomentumStock>, InsightError>;

    async fn technical_analysis(
        &self,
        stock: &StockDetailInfo,
    ) -> Result<TechnicalAnalysis, InsightError>;

    async fn top_picks(&self) -> Result<TopPicksAnalysis, InsightError>;

    async fn investment_projection(
        &self,
        position: &Position,
    ) -> Result<InvestmentProjection, InsightError>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, InsightError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| InsightError::ConfigError("Gateway API key not set (INSIGHT_API_KEY)".to_string()))?;

        let timeout = Duration::from_millis(config.timeout_ms.unwrap_or(30000));
        let client = Client::builder().timeout(timeout).build()?;

        Ok(GeminiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
        })
    }

    /// 프롬프트와 응답 스키마 하나로 완성 요청을 보낸다.
    async fn generate<T: DeserializeOwned>(
        &self,
        prompt: &str,
        response_schema: Value,
    ) -> Result<T, InsightError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema
            }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(InsightError::Gateway(format!(
                "generateContent failed: {}",
                response.status()
            )));
        }

        let payload: Value = response.json().await?;
        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| InsightError::Gateway("empty completion response".to_string()))?;

        Ok(serde_json::from_str(text)?)
    }
}

// 실패를 기능별 안내 문구로 바꾼다. 원인은 로그에만 남긴다.
fn feature_error(feature: &str, error: InsightError, message: &str) -> InsightError {
    log::error!("{} 요청 실패: {}", feature, error);
    InsightError::Gateway(message.to_string())
}

#[async_trait]
impl InsightGateway for GeminiClient {
    async fn keyword_trends(&self) -> Result<Vec<KeywordTrend>, InsightError> {
        self.generate(prompts::KEYWORD_TRENDS, schema::keyword_trends())
            .await
            .map_err(|e| feature_error("급상승 키워드", e, "급상승 키워드를 가져오는 데 실패했습니다."))
    }

    async fn market_trends(&self) -> Result<Vec<MarketTrend>, InsightError> {
        self.generate(prompts::MARKET_TRENDS, schema::market_trends())
            .await
            .map_err(|e| feature_error("시장 트렌드", e, "시장 트렌드를 가져오는 데 실패했습니다."))
    }

    async fn analyze_sector(&self, sector: &str) -> Result<SectorAnalysis, InsightError> {
        self.generate(&prompts::sector_analysis(sector), schema::sector_analysis())
            .await
            .map_err(|e| feature_error("섹터 분석", e, "섹터 분석에 실패했습니다."))
    }

    async fn screen_companies(
        &self,
        criteria: &ScreeningCriteria,
    ) -> Result<Vec<ScreenedCompany>, InsightError> {
        self.generate(&prompts::screen_companies(criteria), schema::screened_companies())
            .await
            .map_err(|e| feature_error("기업 스크리닝", e, "기업 스크리닝에 실패했습니다."))
    }

    async fn momentum_stocks(&self, market: &str) -> Result<Vec<MomentumStock>, InsightError> {
        self.generate(&prompts::momentum_stocks(market), schema::momentum_stocks())
            .await
            .map_err(|e| feature_error("모멘텀 신호", e, "모멘텀 신호 종목을 찾는 데 실패했습니다."))
    }

    async fn technical_analysis(
        &self,
        stock: &StockDetailInfo,
    ) -> Result<TechnicalAnalysis, InsightError> {
        self.generate(&prompts::technical_analysis(stock), schema::technical_analysis())
            .await
            .map_err(|e| feature_error("기술적 분석", e, "종목 기술적 분석에 실패했습니다."))
    }

    async fn top_picks(&self) -> Result<TopPicksAnalysis, InsightError> {
        self.generate(prompts::TOP_PICKS, schema::top_picks())
            .await
            .map_err(|e| feature_error("Top Pick", e, "오늘의 Top Pick을 가져오는 데 실패했습니다."))
    }

    async fn investment_projection(
        &self,
        position: &Position,
    ) -> Result<InvestmentProjection, InsightError> {
        self.generate(&prompts::investment_projection(position), schema::investment_projection())
            .await
            .map_err(|e| feature_error("수익 예측", e, "가상투자 수익률 예측에 실패했습니다."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewayConfig;

    fn config_with_key(api_key: Option<&str>) -> GatewayConfig {
        GatewayConfig {
            base_url: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
            api_key: api_key.map(String::from),
            model: "gemini-2.5-flash".to_string(),
            timeout_ms: Some(1000),
        }
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = GeminiClient::new(&config_with_key(None));

        assert!(matches!(result, Err(InsightError::ConfigError(_))));
    }

    #[test]
    fn test_client_normalizes_base_url() {
        let client = GeminiClient::new(&config_with_key(Some("test-key"))).unwrap();

        assert_eq!(client.base_url, "https://generativelanguage.googleapis.com/v1beta");
    }

    #[test]
    fn test_feature_error_replaces_cause_with_user_message() {
        let cause = InsightError::Gateway("generateContent failed: 500".to_string());

        let err = feature_error("시장 트렌드", cause, "시장 트렌드를 가져오는 데 실패했습니다.");

        assert_eq!(err.to_string(), "시장 트렌드를 가져오는 데 실패했습니다.");
    }
}
