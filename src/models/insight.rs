//! 원격 인사이트 게이트웨이가 돌려주는 응답 모델
//!
//! 각 모델의 형태는 게이트웨이 요청에 함께 선언되는 응답 스키마와
//! 일치한다. 와이어 포맷은 camelCase.

use serde::{Deserialize, Serialize};

/// 추천 종목 참조 (이름 + 티커)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub ticker: String,
}

/// 트래픽 급상승 키워드와 관련 종목
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordTrend {
    pub keyword: String,
    pub reason: String,
    /// 지난 한 달간 트래픽 추이 (스파크라인 입력)
    pub trend_data: Vec<f64>,
    pub companies: Vec<Company>,
}

/// 신흥 투자 트렌드
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrend {
    pub trend_name: String,
    pub explanation: String,
    pub companies: Vec<Company>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorCompany {
    pub name: String,
    pub ticker: String,
    pub rationale: String,
}

/// 섹터 분석 리포트
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorAnalysis {
    pub sector_overview: String,
    pub growth_drivers: Vec<String>,
    pub risks: Vec<String>,
    pub promising_companies: Vec<SectorCompany>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenedCompany {
    pub name: String,
    pub ticker: String,
    pub summary: String,
    pub justification: String,
}

/// 기업 스크리닝 조건
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningCriteria {
    pub market_cap: String,
    pub pe_ratio: String,
    pub growth_potential: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumStock {
    pub name: String,
    pub ticker: String,
    pub signal: String,
}

/// 기술적 분석 대상 종목과 추천 맥락
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetailInfo {
    pub name: String,
    pub ticker: String,
    /// 이 종목이 추천된 이유
    pub context: String,
}

/// OHLC 캔들 한 개. 수록 순서 = 시간 순서 (오래된 것부터).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSample {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// 기술적 분석 리포트
///
/// currentPrice는 chartData 마지막 종가, previousClose는 마지막에서 두
/// 번째 종가와 일치하도록 게이트웨이에 요청한다. 로컬에서 검증하지는
/// 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalAnalysis {
    pub entry_price: String,
    pub target_price: String,
    pub stop_loss_price: String,
    pub analysis_summary: String,
    pub previous_close: String,
    pub previous_all_time_high: String,
    pub current_price: String,
    pub keywords: Vec<String>,
    pub chart_data: Vec<PriceSample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPickStock {
    pub name: String,
    pub ticker: String,
    pub rationale: String,
}

/// 오늘의 Top Pick 3분류
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPicksAnalysis {
    pub high_growth: Vec<TopPickStock>,
    pub medium_risk: Vec<TopPickStock>,
    pub safe: Vec<TopPickStock>,
}

/// 가상투자 수익 예측 리포트
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentProjection {
    pub current_value: f64,
    #[serde(rename = "projectedValue6M")]
    pub projected_value_6m: f64,
    #[serde(rename = "targetPrice6M")]
    pub target_price_6m: f64,
    pub rationale: String,
}
