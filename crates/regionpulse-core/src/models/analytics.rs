//! 분석 요청/응답 모델.

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::CoreError;

/// 빈 리전 목록에 대한 검증 메시지 (API 응답 `detail`로 그대로 노출)
pub const EMPTY_REGIONS_MESSAGE: &str = "regions list cannot be empty";

/// 리전별 분석 요청
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    /// 조회할 리전 목록 (중복 허용, 비어 있으면 안 됨)
    pub regions: Vec<String>,
    /// 위반 판정 임계값 (밀리초, 초과 시 위반)
    pub threshold_ms: f64,
}

impl AnalyticsRequest {
    /// 요청 불변식 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.regions.is_empty() {
            return Err(CoreError::Validation {
                field: "regions".to_string(),
                message: EMPTY_REGIONS_MESSAGE.to_string(),
            });
        }
        Ok(())
    }
}

/// 리전 요약 통계
///
/// 일치하는 레코드가 없으면 `Default` (모두 0)를 사용한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    /// 평균 지연 (밀리초)
    pub avg_latency: f64,
    /// 95 백분위 지연 (밀리초, 선형 보간)
    pub p95_latency: f64,
    /// 평균 가용성
    pub avg_uptime: f64,
    /// 임계값 초과 횟수
    pub breaches: u64,
}

/// 리전 → 요약 매핑 (요청 순서 유지)
///
/// JSON 객체로 직렬화되며 키 순서는 처음 삽입된 순서를 따른다.
/// 같은 리전을 다시 넣으면 값만 갱신되고 위치는 그대로다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsReport {
    entries: Vec<(String, RegionSummary)>,
}

impl AnalyticsReport {
    /// 빈 리포트
    pub fn new() -> Self {
        Self::default()
    }

    /// 리전 요약 기록 (기존 키면 제자리 갱신)
    pub fn insert(&mut self, region: impl Into<String>, summary: RegionSummary) {
        let region = region.into();
        match self.entries.iter_mut().find(|(key, _)| *key == region) {
            Some((_, existing)) => *existing = summary,
            None => self.entries.push((region, summary)),
        }
    }

    pub fn get(&self, region: &str) -> Option<&RegionSummary> {
        self.entries
            .iter()
            .find(|(key, _)| key == region)
            .map(|(_, summary)| summary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 삽입 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionSummary)> {
        self.entries
            .iter()
            .map(|(key, summary)| (key.as_str(), summary))
    }
}

impl Index<&str> for AnalyticsReport {
    type Output = RegionSummary;

    fn index(&self, region: &str) -> &RegionSummary {
        match self.get(region) {
            Some(summary) => summary,
            None => panic!("리포트에 없는 리전: {region}"),
        }
    }
}

impl Serialize for AnalyticsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (region, summary) in &self.entries {
            map.serialize_entry(region, summary)?;
        }
        map.end()
    }
}
