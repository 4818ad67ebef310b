//! 로깅 유틸리티
//!
//! 로그 초기화 및 유틸리티 함수 제공

use env_logger::Builder;
use log::LevelFilter;
use std::env;

use crate::error::InsightError;

/// 로깅 시스템 초기화
pub fn init() -> Result<(), InsightError> {
    let mut builder = Builder::from_default_env();

    // RUST_LOG 환경변수 확인
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // 로그 레벨 파싱
    let level_filter = match log_level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    builder
        .filter_level(level_filter)
        .format_timestamp_millis()
        .init();

    log::info!("로깅 시스템 초기화 완료: 레벨 = {}", log_level);

    Ok(())
}

/// 인사이트 요청 시작 로그
pub fn log_insight_request(feature: &str) {
    log::info!("인사이트 요청 시작: {}", feature);
}

/// 인사이트 요청 종료 로그
pub fn log_insight_result(feature: &str, success: bool) {
    if success {
        log::info!("인사이트 요청 완료: {}", feature);
    } else {
        log::warn!("인사이트 요청 실패: {}", feature);
    }
}

/// 저장소 오류 로그 (전파하지 않고 기록만 한다)
pub fn log_storage_error(context: &str, error: &InsightError) {
    log::error!("저장소 오류 - {}: {}", context, error);
}
