//! 텔레메트리 레코드 모델.

use serde::{Deserialize, Serialize};

/// 단일 텔레메트리 측정 레코드
///
/// 시작 시 한 번 로드된 후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// 리전 식별자 (예: "us-east", 대소문자 구분)
    pub region: String,
    /// 지연 시간 (밀리초)
    pub latency_ms: f64,
    /// 가용성 (소스 데이터의 단위 그대로: 비율 또는 백분율)
    pub uptime: f64,
}

impl TelemetryRecord {
    /// 새 레코드 생성
    pub fn new(region: impl Into<String>, latency_ms: f64, uptime: f64) -> Self {
        Self {
            region: region.into(),
            latency_ms,
            uptime,
        }
    }
}
