//! 리전별 집계기.
//!
//! 요청된 리전마다 레코드를 필터링하고 통계 엔진으로 요약을 만든다.
//! 입력 레코드는 읽기만 한다.

use tracing::debug;

use crate::models::analytics::{AnalyticsReport, RegionSummary};
use crate::models::telemetry::TelemetryRecord;
use crate::stats::{mean, percentile};

/// p95 지연 계산에 쓰는 백분위
pub const LATENCY_PERCENTILE: f64 = 95.0;

/// 단일 리전 레코드 집합의 요약
///
/// 호출자가 이미 리전으로 필터링한 레코드를 받는다.
/// 빈 집합이면 모두 0인 요약을 반환한다.
pub fn summarize<'a, I>(records: I, threshold_ms: f64) -> RegionSummary
where
    I: IntoIterator<Item = &'a TelemetryRecord>,
{
    let (latencies, uptimes): (Vec<f64>, Vec<f64>) = records
        .into_iter()
        .map(|r| (r.latency_ms, r.uptime))
        .unzip();

    if latencies.is_empty() {
        return RegionSummary::default();
    }

    RegionSummary {
        avg_latency: mean(&latencies),
        p95_latency: percentile(&latencies, LATENCY_PERCENTILE),
        avg_uptime: mean(&uptimes),
        // 임계값과 같은 값은 위반이 아님
        breaches: latencies.iter().filter(|&&v| v > threshold_ms).count() as u64,
    }
}

/// 요청 리전 목록에 대한 집계
///
/// 리전은 정확한 문자열 일치로 비교한다 (대소문자 구분, 정규화 없음).
/// 데이터가 없는 리전은 에러가 아니라 0 요약으로 채운다.
/// 결과 키는 요청 순서를 따르며, 중복 리전은 첫 위치의 키에 다시 기록된다.
pub fn aggregate<S>(
    records: &[TelemetryRecord],
    regions: &[S],
    threshold_ms: f64,
) -> AnalyticsReport
where
    S: AsRef<str>,
{
    let mut report = AnalyticsReport::new();

    for region in regions {
        let region = region.as_ref();
        let summary = summarize(records.iter().filter(|r| r.region == region), threshold_ms);
        debug!(
            region,
            avg_latency = summary.avg_latency,
            p95_latency = summary.p95_latency,
            breaches = summary.breaches,
            "리전 집계 완료"
        );
        report.insert(region, summary);
    }

    report
}
