//! 영속 슬롯
//!
//! 포트폴리오 전체가 직렬화되어 담기는 이름 있는 슬롯 하나.
//! 백엔드를 바꿔 끼울 수 있도록 좁은 인터페이스 뒤에 격리한다.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::StorageConfig;
use crate::error::InsightError;

/// 슬롯 인터페이스
pub trait PersistentSlot: Send + Sync {
    /// 슬롯 내용 읽기. 슬롯이 아직 없으면 None.
    fn read(&self) -> Result<Option<String>, InsightError>;

    /// 슬롯 전체를 덮어쓰기
    fn write(&self, contents: &str) -> Result<(), InsightError>;
}

/// 파일 기반 슬롯 구현. `{data_dir}/{slot_key}.json` 한 파일을 사용한다.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(config: &StorageConfig) -> Self {
        let path = PathBuf::from(&config.data_dir).join(format!("{}.json", config.slot_key));
        FileSlot { path }
    }

    pub fn with_path(path: impl AsRef<Path>) -> Self {
        FileSlot {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PersistentSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, InsightError> {
        if !self.path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| InsightError::Storage(format!("Failed to read slot {}: {}", self.path.display(), e)))
    }

    fn write(&self, contents: &str) -> Result<(), InsightError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| InsightError::Storage(format!("Failed to create data dir: {}", e)))?;
        }

        fs::write(&self.path, contents)
            .map_err(|e| InsightError::Storage(format!("Failed to write slot {}: {}", self.path.display(), e)))
    }
}

/// 메모리 기반 슬롯 구현. 복제본끼리 내용을 공유하므로 재시작
/// 시뮬레이션에 쓰인다.
#[derive(Clone, Default)]
pub struct MemorySlot {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        MemorySlot::default()
    }
}

impl PersistentSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, InsightError> {
        let guard = self
            .contents
            .lock()
            .map_err(|_| InsightError::Storage("Slot lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> Result<(), InsightError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| InsightError::Storage("Slot lock poisoned".to_string()))?;
        *guard = Some(contents.to_string());
        Ok(())
    }
}
