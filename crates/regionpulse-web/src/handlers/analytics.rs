//! 리전별 분석 API 핸들러.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use regionpulse_core::models::analytics::{AnalyticsReport, AnalyticsRequest};
use tracing::debug;

use crate::error::ApiError;
use crate::AppState;

/// 리전별 요약 통계 조회
///
/// POST /analytics
///
/// 본문: `{"regions": [...], "threshold_ms": number}`.
/// 빈 리전 목록이나 잘못된 본문은 400을 반환한다.
pub async fn post_analytics(
    State(state): State<AppState>,
    payload: Result<Json<AnalyticsRequest>, JsonRejection>,
) -> Result<Json<AnalyticsReport>, ApiError> {
    let Json(request) = payload?;
    request.validate()?;

    debug!(
        regions = request.regions.len(),
        threshold_ms = request.threshold_ms,
        "분석 요청 수신"
    );

    let report = state
        .store
        .analyze(request.regions.as_slice(), request.threshold_ms);
    Ok(Json(report))
}
