//! 포트폴리오 스토어
//!
//! 포지션 목록의 단일 소유자. 모든 변경은 사용자 동작에 의해
//! 단일 스레드에서 순차적으로 일어나며, 변경 직후 전체 목록을
//! 슬롯에 다시 직렬화한다.

use chrono::Utc;

use crate::error::InsightError;
use crate::models::position::{Position, PositionInput};
use crate::portfolio::slot::PersistentSlot;
use crate::utils::logging;

pub struct PortfolioStore {
    slot: Box<dyn PersistentSlot>,
    positions: Vec<Position>,
    // 시각 기반 id의 단조 증가 보장용
    last_id: i64,
}

impl PortfolioStore {
    /// 슬롯에서 포트폴리오를 복원한다.
    ///
    /// 슬롯이 비어 있거나 내용이 깨져 있으면 빈 목록으로 시작한다.
    /// 복구 가능한 조건이므로 오류를 내지 않고 기록만 남긴다.
    pub fn load(slot: Box<dyn PersistentSlot>) -> Self {
        let positions = Self::hydrate(slot.as_ref());
        let last_id = positions
            .iter()
            .filter_map(|p| p.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);

        log::info!("포트폴리오 복원 완료: {}건", positions.len());

        PortfolioStore {
            slot,
            positions,
            last_id,
        }
    }

    fn hydrate(slot: &dyn PersistentSlot) -> Vec<Position> {
        match slot.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Position>>(&raw) {
                Ok(positions) => positions,
                Err(e) => {
                    log::warn!("슬롯 내용을 해석할 수 없어 빈 목록으로 시작합니다: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                logging::log_storage_error("슬롯 읽기", &e);
                Vec::new()
            }
        }
    }

    /// 포지션 추가
    ///
    /// 필수 입력이 모두 채워졌는지 검증한 뒤 새 id를 부여하고 목록
    /// 끝에 추가한다. 성공 시 전체 목록을 슬롯에 기록한다.
    pub fn add(&mut self, input: PositionInput) -> Result<Position, InsightError> {
        let missing = Self::missing_fields(&input);
        if !missing.is_empty() {
            return Err(InsightError::InvalidInput(format!(
                "required fields missing: {}",
                missing.join(", ")
            )));
        }

        let purchase_date = if input.purchase_date.trim().is_empty() {
            Utc::now().format("%Y-%m-%d").to_string()
        } else {
            input.purchase_date.trim().to_string()
        };

        let position = Position {
            id: self.next_id(),
            name: input.name.trim().to_string(),
            ticker: input.ticker.trim().to_uppercase(),
            purchase_date,
            quantity: input.quantity.unwrap_or(0.0),
            avg_price: input.avg_price.unwrap_or(0.0),
        };

        self.positions.push(position.clone());
        self.persist("포지션 추가");

        log::info!(
            "포지션 추가: {} ({}) - 수량: {} - 평단: {}",
            position.name,
            position.ticker,
            position.quantity,
            position.avg_price
        );

        Ok(position)
    }

    /// 포지션 삭제. 해당 id가 없으면 아무 일도 하지 않는다 (오류 아님).
    ///
    /// 사용자 확인(예/아니오)은 호출 전에 표시 계층에서 끝나 있어야 한다.
    pub fn remove(&mut self, id: &str) {
        let before = self.positions.len();
        self.positions.retain(|p| p.id != id);

        if self.positions.len() == before {
            log::debug!("삭제 대상 포지션 없음: {}", id);
            return;
        }

        self.persist("포지션 삭제");
        log::info!("포지션 삭제: {}", id);
    }

    /// 현재 포지션 목록 (추가 순서 유지)
    pub fn list(&self) -> Vec<Position> {
        self.positions.clone()
    }

    /// id로 포지션 찾기
    pub fn find(&self, id: &str) -> Option<Position> {
        self.positions.iter().find(|p| p.id == id).cloned()
    }

    fn missing_fields(input: &PositionInput) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if input.name.trim().is_empty() {
            missing.push("name");
        }
        if input.ticker.trim().is_empty() {
            missing.push("ticker");
        }
        match input.quantity {
            Some(q) if q.is_finite() => {}
            _ => missing.push("quantity"),
        }
        match input.avg_price {
            Some(p) if p.is_finite() => {}
            _ => missing.push("avgPrice"),
        }

        missing
    }

    // 현재 시각(밀리초) 기반 토큰. 같은 밀리초에 연속 추가되면
    // 직전 id보다 1 크게 올려 유일성을 지킨다.
    fn next_id(&mut self) -> String {
        let mut id = Utc::now().timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;
        id.to_string()
    }

    // 전체 목록을 슬롯에 재직렬화. 쓰기 실패는 기록만 하고 메모리
    // 상태는 되돌리지 않는다. 다음 성공한 쓰기에서 다시 일치한다.
    fn persist(&self, context: &str) {
        let serialized = match serde_json::to_string(&self.positions) {
            Ok(s) => s,
            Err(e) => {
                logging::log_storage_error(context, &InsightError::SerializationError(e));
                return;
            }
        };

        if let Err(e) = self.slot.write(&serialized) {
            logging::log_storage_error(context, &e);
        }
    }
}
