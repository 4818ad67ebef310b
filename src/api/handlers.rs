//! 표시 계층을 위한 HTTP 핸들러
//!
//! 기능 뷰 하나당 요청 생명주기는 Idle → Pending → 완료(성공/실패)
//! 하나뿐이다. 같은 기능의 요청이 진행 중이면 새 요청은 409로
//! 거절된다 (중복 제출 방지). 서로 다른 기능끼리는 독립적으로
//! 동시에 진행될 수 있다.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;
use warp::http::StatusCode;
use warp::reply::{json, with_status, Json, Reply, WithStatus};

use crate::chart;
use crate::error::InsightError;
use crate::gateway::client::InsightGateway;
use crate::models::insight::{PriceSample, ScreeningCriteria, StockDetailInfo};
use crate::models::position::PositionInput;
use crate::portfolio::store::PortfolioStore;
use crate::portfolio::valuation;
use crate::utils::logging;

pub type SharedStore = Arc<RwLock<PortfolioStore>>;
pub type SharedGateway = Arc<dyn InsightGateway>;
/// 진행 중인 기능 뷰 이름 집합 (기능별 busy 플래그)
pub type InFlight = Arc<RwLock<HashSet<&'static str>>>;

/// 헬스체크 핸들러
pub async fn health_handler() -> Result<impl Reply, warp::Rejection> {
    let response = serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    });
    Ok(with_status(json(&response), StatusCode::OK))
}

// ====== 기능 뷰 공통 요청 생명주기 ======

async fn try_begin(in_flight: &InFlight, feature: &'static str) -> bool {
    in_flight.write().await.insert(feature)
}

async fn finish(in_flight: &InFlight, feature: &'static str) {
    in_flight.write().await.remove(feature);
}

fn busy_response(feature: &str) -> WithStatus<Json> {
    let body = serde_json::json!({
        "error": format!("'{}' 요청이 이미 진행 중입니다.", feature)
    });
    with_status(json(&body), StatusCode::CONFLICT)
}

fn gateway_error_response(error: &InsightError) -> WithStatus<Json> {
    let body = serde_json::json!({ "error": error.to_string() });
    with_status(json(&body), StatusCode::BAD_GATEWAY)
}

fn not_found_response(id: &str) -> WithStatus<Json> {
    let error = InsightError::PositionNotFound(id.to_string());
    let body = serde_json::json!({ "error": error.to_string() });
    with_status(json(&body), StatusCode::NOT_FOUND)
}

/// 게이트웨이 요청 하나를 busy 플래그로 감싸 실행한다
async fn run_insight<T, F>(
    feature: &'static str,
    in_flight: InFlight,
    request: F,
) -> Result<WithStatus<Json>, warp::Rejection>
where
    T: serde::Serialize,
    F: Future<Output = Result<T, InsightError>>,
{
    if !try_begin(&in_flight, feature).await {
        return Ok(busy_response(feature));
    }

    logging::log_insight_request(feature);
    let result = request.await;
    finish(&in_flight, feature).await;

    match result {
        Ok(data) => {
            logging::log_insight_result(feature, true);
            Ok(with_status(json(&data), StatusCode::OK))
        }
        Err(e) => {
            logging::log_insight_result(feature, false);
            Ok(gateway_error_response(&e))
        }
    }
}

// ====== 인사이트 핸들러 ======

pub async fn get_keyword_trends(
    gateway: SharedGateway,
    in_flight: InFlight,
) -> Result<impl Reply, warp::Rejection> {
    run_insight("keywords", in_flight, gateway.keyword_trends()).await
}

pub async fn get_market_trends(
    gateway: SharedGateway,
    in_flight: InFlight,
) -> Result<impl Reply, warp::Rejection> {
    run_insight("trends", in_flight, gateway.market_trends()).await
}

#[derive(Debug, Deserialize)]
pub struct SectorRequest {
    pub sector: String,
}

pub async fn analyze_sector(
    req: SectorRequest,
    gateway: SharedGateway,
    in_flight: InFlight,
) -> Result<impl Reply, warp::Rejection> {
    run_insight("sector", in_flight, gateway.analyze_sector(&req.sector)).await
}

pub async fn screen_companies(
    criteria: ScreeningCriteria,
    gateway: SharedGateway,
    in_flight: InFlight,
) -> Result<impl Reply, warp::Rejection> {
    run_insight("screener", in_flight, gateway.screen_companies(&criteria)).await
}

#[derive(Debug, Deserialize)]
pub struct MomentumRequest {
    pub market: String,
}

pub async fn find_momentum_stocks(
    req: MomentumRequest,
    gateway: SharedGateway,
    in_flight: InFlight,
) -> Result<impl Reply, warp::Rejection> {
    run_insight("momentum", in_flight, gateway.momentum_stocks(&req.market)).await
}

pub async fn get_technical_analysis(
    stock: StockDetailInfo,
    gateway: SharedGateway,
    in_flight: InFlight,
) -> Result<impl Reply, warp::Rejection> {
    run_insight("technical", in_flight, gateway.technical_analysis(&stock)).await
}

pub async fn get_top_picks(
    gateway: SharedGateway,
    in_flight: InFlight,
) -> Result<impl Reply, warp::Rejection> {
    run_insight("topPicks", in_flight, gateway.top_picks()).await
}

// ====== 포트폴리오 핸들러 ======

pub async fn list_positions(store: SharedStore) -> Result<impl Reply, warp::Rejection> {
    let store = store.read().await;
    Ok(with_status(json(&store.list()), StatusCode::OK))
}

pub async fn create_position(
    input: PositionInput,
    store: SharedStore,
) -> Result<impl Reply, warp::Rejection> {
    let mut store = store.write().await;
    match store.add(input) {
        Ok(position) => Ok(with_status(json(&position), StatusCode::CREATED)),
        Err(e) => {
            let body = serde_json::json!({ "error": e.to_string() });
            Ok(with_status(json(&body), StatusCode::BAD_REQUEST))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub confirm: Option<bool>,
}

/// 포지션 삭제. 명시적 confirm=true 없이는 수행하지 않는다.
pub async fn delete_position(
    id: String,
    query: DeleteQuery,
    store: SharedStore,
) -> Result<impl Reply, warp::Rejection> {
    if query.confirm != Some(true) {
        let body = serde_json::json!({
            "error": "삭제하려면 confirm=true 확인이 필요합니다."
        });
        return Ok(with_status(json(&body), StatusCode::BAD_REQUEST));
    }

    store.write().await.remove(&id);
    Ok(with_status(
        json(&serde_json::json!({ "status": "deleted" })),
        StatusCode::OK,
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    /// 사용자가 입력한 현재가 (자유 형식)
    pub current_price: String,
}

/// 손익 계산. 현재가가 유효하지 않으면 결과 없이 null을 돌려준다.
pub async fn evaluate_position(
    id: String,
    req: ValuationRequest,
    store: SharedStore,
) -> Result<impl Reply, warp::Rejection> {
    let position = store.read().await.find(&id);

    match position {
        Some(position) => Ok(with_status(
            json(&valuation::evaluate_input(&position, &req.current_price)),
            StatusCode::OK,
        )),
        None => Ok(not_found_response(&id)),
    }
}

pub async fn project_position(
    id: String,
    store: SharedStore,
    gateway: SharedGateway,
    in_flight: InFlight,
) -> Result<impl Reply, warp::Rejection> {
    let position = store.read().await.find(&id);

    match position {
        Some(position) => {
            run_insight("projection", in_flight, gateway.investment_projection(&position)).await
        }
        None => Ok(not_found_response(&id)),
    }
}

// ====== 차트 핸들러 ======

#[derive(Debug, Deserialize)]
pub struct SparklineRequest {
    pub data: Vec<f64>,
}

/// 스파크라인 좌표. 그릴 수 없는 입력이면 null.
pub async fn map_sparkline(req: SparklineRequest) -> Result<impl Reply, warp::Rejection> {
    Ok(with_status(json(&chart::map_series(&req.data)), StatusCode::OK))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandleChartRequest {
    pub chart_data: Vec<PriceSample>,
    pub entry_price: String,
    pub target_price: String,
    pub stop_loss_price: String,
}

/// 캔들스틱 차트 좌표. 그릴 수 없는 입력이면 null.
pub async fn map_candle_chart(req: CandleChartRequest) -> Result<impl Reply, warp::Rejection> {
    let chart = chart::map_candles(
        &req.chart_data,
        &req.entry_price,
        &req.target_price,
        &req.stop_loss_price,
    );
    Ok(with_status(json(&chart), StatusCode::OK))
}
