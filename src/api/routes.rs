use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use warp::Filter;

use crate::api::handlers::{self, InFlight, SharedGateway, SharedStore};

/// 인사이트 서비스의 API 라우트 생성
pub fn create_routes(
    store: SharedStore,
    gateway: SharedGateway,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let in_flight: InFlight = Arc::new(RwLock::new(HashSet::new()));

    // 헬스체크 라우트
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(handlers::health_handler);

    // 상태 필터 생성
    let store_filter = warp::any().map(move || store.clone());
    let gateway_filter = warp::any().map(move || gateway.clone());
    let in_flight_filter = warp::any().map(move || in_flight.clone());

    // 인사이트 라우트 (기능 뷰 하나당 요청 하나)
    let insights = warp::path("insights");

    let insight_routes = insights
        .and(warp::path("keywords"))
        .and(warp::path::end())
        .and(warp::get())
        .and(gateway_filter.clone())
        .and(in_flight_filter.clone())
        .and_then(handlers::get_keyword_trends)
        .or(insights
            .and(warp::path("trends"))
            .and(warp::path::end())
            .and(warp::get())
            .and(gateway_filter.clone())
            .and(in_flight_filter.clone())
            .and_then(handlers::get_market_trends))
        .or(insights
            .and(warp::path("sector"))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(gateway_filter.clone())
            .and(in_flight_filter.clone())
            .and_then(handlers::analyze_sector))
        .or(insights
            .and(warp::path("screener"))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(gateway_filter.clone())
            .and(in_flight_filter.clone())
            .and_then(handlers::screen_companies))
        .or(insights
            .and(warp::path("momentum"))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(gateway_filter.clone())
            .and(in_flight_filter.clone())
            .and_then(handlers::find_momentum_stocks))
        .or(insights
            .and(warp::path("technical"))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(gateway_filter.clone())
            .and(in_flight_filter.clone())
            .and_then(handlers::get_technical_analysis))
        .or(insights
            .and(warp::path("top-picks"))
            .and(warp::path::end())
            .and(warp::get())
            .and(gateway_filter.clone())
            .and(in_flight_filter.clone())
            .and_then(handlers::get_top_picks));

    // 포트폴리오 라우트
    let portfolio = warp::path("portfolio");

    let portfolio_routes = portfolio
        .and(warp::path::param::<String>())
        .and(warp::path("valuation"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(handlers::evaluate_position)
        .or(portfolio
            .and(warp::path::param::<String>())
            .and(warp::path("projection"))
            .and(warp::path::end())
            .and(warp::post())
            .and(store_filter.clone())
            .and(gateway_filter.clone())
            .and(in_flight_filter.clone())
            .and_then(handlers::project_position))
        .or(portfolio
            .and(warp::path::param::<String>())
            .and(warp::path::end())
            .and(warp::delete())
            .and(warp::query::<handlers::DeleteQuery>())
            .and(store_filter.clone())
            .and_then(handlers::delete_position))
        .or(portfolio
            .and(warp::path::end())
            .and(warp::get())
            .and(store_filter.clone())
            .and_then(handlers::list_positions))
        .or(portfolio
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and(store_filter.clone())
            .and_then(handlers::create_position));

    // 차트 좌표 라우트
    let charts = warp::path("charts");

    let chart_routes = charts
        .and(warp::path("sparkline"))
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and_then(handlers::map_sparkline)
        .or(charts
            .and(warp::path("candles"))
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::json())
            .and_then(handlers::map_candle_chart));

    // 모든 라우트 결합
    health
        .or(insight_routes)
        .or(portfolio_routes)
        .or(chart_routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InsightError;
    use crate::gateway::client::MockInsightGateway;
    use crate::models::insight::{TopPickStock, TopPicksAnalysis};
    use crate::portfolio::slot::MemorySlot;
    use crate::portfolio::store::PortfolioStore;
    use serde_json::Value;

    fn test_state(mock: MockInsightGateway) -> (SharedStore, SharedGateway) {
        let store = Arc::new(RwLock::new(PortfolioStore::load(Box::new(MemorySlot::new()))));
        let gateway: SharedGateway = Arc::new(mock);
        (store, gateway)
    }

    #[tokio::test]
    async fn test_health_route() {
        let (store, gateway) = test_state(MockInsightGateway::new());
        let routes = create_routes(store, gateway);

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 200);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_top_picks_success() {
        let mut mock = MockInsightGateway::new();
        mock.expect_top_picks().returning(|| {
            Ok(TopPicksAnalysis {
                high_growth: vec![TopPickStock {
                    name: "Alpha Corp".to_string(),
                    ticker: "ALPH".to_string(),
                    rationale: "high growth".to_string(),
                }],
                medium_risk: vec![],
                safe: vec![],
            })
        });
        let (store, gateway) = test_state(mock);
        let routes = create_routes(store, gateway);

        let response = warp::test::request()
            .method("GET")
            .path("/insights/top-picks")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 200);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["highGrowth"][0]["ticker"], "ALPH");
    }

    #[tokio::test]
    async fn test_gateway_failure_maps_to_feature_message() {
        let mut mock = MockInsightGateway::new();
        mock.expect_market_trends()
            .returning(|| Err(InsightError::Gateway("시장 트렌드를 가져오는 데 실패했습니다.".to_string())));
        let (store, gateway) = test_state(mock);
        let routes = create_routes(store, gateway);

        let response = warp::test::request()
            .method("GET")
            .path("/insights/trends")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 502);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["error"], "시장 트렌드를 가져오는 데 실패했습니다.");
    }

    #[tokio::test]
    async fn test_portfolio_add_list_delete_flow() {
        let (store, gateway) = test_state(MockInsightGateway::new());
        let routes = create_routes(store, gateway);

        // 추가
        let response = warp::test::request()
            .method("POST")
            .path("/portfolio")
            .json(&serde_json::json!({
                "name": "Sample Co",
                "ticker": "abc",
                "purchaseDate": "2024-01-01",
                "quantity": 10.0,
                "avgPrice": 100.0
            }))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 201);
        let created: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(created["ticker"], "ABC");
        let id = created["id"].as_str().unwrap().to_string();

        // 목록
        let response = warp::test::request()
            .method("GET")
            .path("/portfolio")
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 200);
        let listed: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(listed.as_array().unwrap().len(), 1);

        // 손익 계산
        let response = warp::test::request()
            .method("POST")
            .path(&format!("/portfolio/{}/valuation", id))
            .json(&serde_json::json!({ "currentPrice": "150" }))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 200);
        let valuation: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(valuation["currentValue"], 1500.0);
        assert_eq!(valuation["gainLoss"], 500.0);
        assert_eq!(valuation["returnRatePercent"], 50.0);

        // 확인 없는 삭제는 거절
        let response = warp::test::request()
            .method("DELETE")
            .path(&format!("/portfolio/{}", id))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 400);

        // 확인 후 삭제
        let response = warp::test::request()
            .method("DELETE")
            .path(&format!("/portfolio/{}?confirm=true", id))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), 200);

        let response = warp::test::request()
            .method("GET")
            .path("/portfolio")
            .reply(&routes)
            .await;
        let listed: Value = serde_json::from_slice(response.body()).unwrap();
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_position_with_missing_fields_is_rejected() {
        let (store, gateway) = test_state(MockInsightGateway::new());
        let routes = create_routes(store, gateway);

        let response = warp::test::request()
            .method("POST")
            .path("/portfolio")
            .json(&serde_json::json!({ "name": "Sample Co" }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 400);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert!(body["error"].as_str().unwrap().contains("ticker"));
    }

    #[tokio::test]
    async fn test_valuation_with_invalid_price_yields_null() {
        let (store, gateway) = test_state(MockInsightGateway::new());
        let routes = create_routes(store.clone(), gateway);

        let id = {
            let mut guard = store.write().await;
            guard
                .add(crate::models::position::PositionInput {
                    name: "Sample Co".to_string(),
                    ticker: "abc".to_string(),
                    purchase_date: "2024-01-01".to_string(),
                    quantity: Some(10.0),
                    avg_price: Some(100.0),
                })
                .unwrap()
                .id
        };

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/portfolio/{}/valuation", id))
            .json(&serde_json::json!({ "currentPrice": "얼마더라" }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 200);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_projection_for_unknown_position_is_404() {
        let (store, gateway) = test_state(MockInsightGateway::new());
        let routes = create_routes(store, gateway);

        let response = warp::test::request()
            .method("POST")
            .path("/portfolio/999/projection")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 404);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(
            body["error"],
            InsightError::PositionNotFound("999".to_string()).to_string()
        );
    }

    #[tokio::test]
    async fn test_sparkline_route_returns_null_for_short_series() {
        let (store, gateway) = test_state(MockInsightGateway::new());
        let routes = create_routes(store, gateway);

        let response = warp::test::request()
            .method("POST")
            .path("/charts/sparkline")
            .json(&serde_json::json!({ "data": [42.0] }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 200);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert!(body.is_null());
    }
}
