use serde::{Deserialize, Serialize};

/// 손익 평가 결과 (파생 값, 저장하지 않음)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub purchase_value: f64,
    pub current_value: f64,
    pub gain_loss: f64,
    pub return_rate_percent: f64,
}

/// 손익 부호 구분. 색상 매핑은 표시 계층의 몫이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GainLossTone {
    Gain,
    Loss,
    Neutral,
}

impl ValuationResult {
    pub fn tone(&self) -> GainLossTone {
        if self.gain_loss > 0.0 {
            GainLossTone::Gain
        } else if self.gain_loss < 0.0 {
            GainLossTone::Loss
        } else {
            GainLossTone::Neutral
        }
    }
}
