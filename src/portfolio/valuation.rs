//! 손익 평가 엔진
//!
//! 포지션과 사용자가 입력한 현재가로 평가금액, 평가손익, 수익률을
//! 계산한다. 순수 함수이며 포지션이나 스토어를 변경하지 않는다.

use crate::models::position::Position;
use crate::models::valuation::ValuationResult;

/// 현재가가 양의 유한한 수일 때만 평가 결과를 돌려준다.
///
/// 그 외 입력은 오류가 아니라 "계산 결과 없음"이다. 호출 측은 수치를
/// 표시하지 않으면 된다.
pub fn evaluate(position: &Position, current_price: f64) -> Option<ValuationResult> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return None;
    }

    let purchase_value = position.quantity * position.avg_price;
    let current_value = position.quantity * current_price;
    let gain_loss = current_value - purchase_value;
    let return_rate_percent = if purchase_value == 0.0 {
        0.0
    } else {
        gain_loss / purchase_value * 100.0
    };

    Some(ValuationResult {
        purchase_value,
        current_value,
        gain_loss,
        return_rate_percent,
    })
}

/// 자유 입력 문자열을 현재가로 해석한 뒤 평가한다.
/// 숫자가 아니면 계산 결과 없음.
pub fn evaluate_input(position: &Position, raw: &str) -> Option<ValuationResult> {
    let current_price = raw.trim().parse::<f64>().ok()?;
    evaluate(position, current_price)
}
