//! 읽기 전용 텔레메트리 저장소.
//!
//! 시작 시 한 번 생성되어 `Arc`로 모든 요청 핸들러와 공유된다.
//! 생성 후 쓰기가 없으므로 잠금이 필요 없다.

use regionpulse_core::aggregate::aggregate;
use regionpulse_core::error::CoreError;
use regionpulse_core::models::analytics::AnalyticsReport;
use regionpulse_core::models::telemetry::TelemetryRecord;
use regionpulse_core::ports::source::TelemetrySource;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

use crate::json_source::JsonFileSource;

/// 인메모리 텔레메트리 저장소
#[derive(Debug, Clone, Default)]
pub struct TelemetryStore {
    records: Vec<TelemetryRecord>,
}

impl TelemetryStore {
    /// JSON 파일에서 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        Self::load_from(&JsonFileSource::new(path.as_ref()))
    }

    /// 임의의 데이터 소스에서 로드
    pub fn load_from(source: &dyn TelemetrySource) -> Result<Self, CoreError> {
        let store = Self::from_records(source.load()?);
        info!(
            "텔레메트리 로드 완료: {} — 레코드 {}건, 리전 {}개",
            source.describe(),
            store.len(),
            store.regions().len()
        );
        Ok(store)
    }

    /// 메모리 레코드로 생성
    pub fn from_records(records: Vec<TelemetryRecord>) -> Self {
        Self { records }
    }

    /// 레코드 수
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 고유 리전 목록 (정렬됨)
    pub fn regions(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.region.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 저장된 레코드에 대한 리전별 집계
    pub fn analyze<S: AsRef<str>>(&self, regions: &[S], threshold_ms: f64) -> AnalyticsReport {
        aggregate(&self.records, regions, threshold_ms)
    }
}
