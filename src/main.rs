mod api;
mod chart;
mod config;
mod error;
mod gateway;
mod models;
mod portfolio;
mod utils;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::api::routes;
use crate::config::Config;
use crate::gateway::client::{GeminiClient, InsightGateway};
use crate::portfolio::slot::FileSlot;
use crate::portfolio::store::PortfolioStore;
use crate::utils::logging;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 로깅 초기화
    logging::init()?;
    log::info!("AI 주식 인사이트 서버 시작...");

    // 설정 로드
    let config = Config::load()?;
    log::info!("설정 로드 완료");

    // 포트폴리오 슬롯에서 복원
    let slot = FileSlot::new(&config.storage);
    let store = Arc::new(RwLock::new(PortfolioStore::load(Box::new(slot))));

    // 게이트웨이 클라이언트 생성
    let gateway: Arc<dyn InsightGateway> = Arc::new(GeminiClient::new(&config.gateway)?);
    log::info!("인사이트 게이트웨이 초기화 완료: 모델 = {}", config.gateway.model);

    // API 라우트 초기화
    let api_routes = routes::create_routes(store, gateway);
    log::info!("API 라우트 초기화 완료");

    // Warp 서버 시작
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    log::info!("서버 시작: http://{}/", addr);
    warp::serve(api_routes).run(addr).await;

    Ok(())
}
