use serde::{Deserialize, Serialize};

/// 가상투자 포지션 한 건
///
/// id는 생성 시 한 번 부여되며 이후 변경되지 않는다. 수정 연산은 없고
/// 삭제만 가능하다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub purchase_date: String,
    pub quantity: f64,
    pub avg_price: f64,
}

/// 포지션 추가 입력 폼
///
/// 검증은 스토어에서 수행한다. purchase_date가 비어 있으면 오늘 날짜로
/// 채워진다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub avg_price: Option<f64>,
}
