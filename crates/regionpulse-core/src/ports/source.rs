//! 텔레메트리 데이터 소스 포트.
//!
//! 구현: `regionpulse-storage` crate (JSON 파일)

use crate::error::CoreError;
use crate::models::telemetry::TelemetryRecord;

/// 텔레메트리 레코드 공급 인터페이스
///
/// 프로세스 시작 시 한 번만 호출된다.
pub trait TelemetrySource: Send + Sync {
    /// 소스 식별자 (로그/에러 메시지용)
    fn describe(&self) -> String;

    /// 전체 레코드 로드
    fn load(&self) -> Result<Vec<TelemetryRecord>, CoreError>;
}
