//! 애플리케이션 설정 구조체.
//!
//! 웹 서버 포트, 외부 접근 허용 여부, 텔레메트리 데이터 파일 경로를 정의한다.
//! JSON 설정 파일에서 로드하며, 누락된 필드는 기본값으로 채운다.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CoreError;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 웹 서버 설정
    #[serde(default)]
    pub web: WebConfig,
    /// 데이터 소스 설정
    #[serde(default)]
    pub data: DataConfig,
}

// ============================================================
// 웹 서버 설정
// ============================================================

/// 웹 서버 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebConfig {
    /// 웹 서버 포트 (기본: 8000)
    #[serde(default = "default_web_port")]
    pub port: u16,
    /// 외부 접근 허용 여부 (false: 127.0.0.1 only)
    #[serde(default)]
    pub allow_external: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_web_port(),
            allow_external: false,
        }
    }
}

// ============================================================
// 데이터 소스 설정
// ============================================================

/// 텔레메트리 데이터 소스 설정
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// 텔레메트리 JSON 파일 경로 (작업 디렉토리 기준)
    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            telemetry_path: default_telemetry_path(),
        }
    }
}

impl AppConfig {
    /// 기본 설정
    pub fn default_config() -> Self {
        Self {
            web: WebConfig::default(),
            data: DataConfig::default(),
        }
    }

    /// JSON 설정 파일 로드
    pub fn load_from_file(path: &Path) -> Result<Self, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
        })?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e))
        })?;

        debug!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.web.port == 0 {
            return Err(CoreError::Config("웹 서버 포트는 0일 수 없습니다".to_string()));
        }
        if self.data.telemetry_path.as_os_str().is_empty() {
            return Err(CoreError::Config(
                "텔레메트리 데이터 경로가 비어 있습니다".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

fn default_web_port() -> u16 {
    8000
}

fn default_telemetry_path() -> PathBuf {
    PathBuf::from("q-vercel-latency.json")
}
