use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::InsightError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 생성형 AI 완성(completion) 엔드포인트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 포트폴리오 슬롯 파일이 놓이는 디렉터리
    pub data_dir: String,
    /// 슬롯 이름. 파일명은 `{slot_key}.json`
    pub slot_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub fn load() -> Result<Self, InsightError> {
        // Try to load from config.json
        let config_path = Path::new("config.json");

        if config_path.exists() {
            let mut file = File::open(config_path)
                .map_err(|e| InsightError::ConfigError(format!("Failed to open config file: {}", e)))?;

            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|e| InsightError::ConfigError(format!("Failed to read config file: {}", e)))?;

            let mut cfg: Config = serde_json::from_str(&contents)
                .map_err(|e| InsightError::ConfigError(format!("Failed to parse config file: {}", e)))?;
            // environment overrides
            cfg.apply_env_overrides();
            Ok(cfg)
        } else {
            // Return default configuration
            let mut cfg = Config::default();
            cfg.apply_env_overrides();
            Ok(cfg)
        }
    }

    /// Apply environment variable overrides for sensitive/runtime fields
    fn apply_env_overrides(&mut self) {
        use std::env;
        if let Ok(v) = env::var("INSIGHT_API_KEY") { if !v.is_empty() { self.gateway.api_key = Some(v); } }
        if let Ok(v) = env::var("INSIGHT_BASE_URL") { if !v.is_empty() { self.gateway.base_url = v; } }
        if let Ok(v) = env::var("INSIGHT_MODEL") { if !v.is_empty() { self.gateway.model = v; } }
        if let Ok(v) = env::var("INSIGHT_DATA_DIR") { if !v.is_empty() { self.storage.data_dir = v; } }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3030,
            },
            gateway: GatewayConfig {
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                api_key: None,
                model: "gemini-2.5-flash".to_string(),
                timeout_ms: Some(30000),
            },
            storage: StorageConfig {
                data_dir: "./data".to_string(),
                slot_key: "virtualInvestments".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
