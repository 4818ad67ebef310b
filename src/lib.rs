//! AI 주식 인사이트 서비스 라이브러리
//!
//! 생성형 AI가 만들어주는 시장 분석(트렌드, 섹터, 스크리닝, 모멘텀,
//! 기술적 분석, Top Pick)과 가상투자 포트폴리오 관리를 제공합니다.

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod portfolio;
pub mod utils;

// 핵심 타입 재노출
pub use crate::error::InsightError;
pub use crate::gateway::client::{GeminiClient, InsightGateway};
pub use crate::models::position::{Position, PositionInput};
pub use crate::models::valuation::{GainLossTone, ValuationResult};
pub use crate::portfolio::store::PortfolioStore;

/// 버전 정보
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 결과 타입 별칭
pub type Result<T> = std::result::Result<T, InsightError>;
