use thiserror::Error;

/// 서비스 전역 오류 타입
///
/// 사용자에게 전달되는 오류는 InvalidInput(입력 차단), Gateway(기능별
/// 안내 문구), PositionNotFound 세 가지뿐이다. Storage 오류는 기록만
/// 하고 전파하지 않는다.
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Gateway(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("포지션을 찾을 수 없습니다: {0}")]
    PositionNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}
