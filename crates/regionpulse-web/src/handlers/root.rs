//! 동작 확인 핸들러.

use axum::Json;
use serde::Serialize;

/// 동작 확인 응답
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// 상태 메시지
    pub message: &'static str,
}

/// 서버 동작 확인
///
/// GET /
pub async fn read_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Latency analytics API is running",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_running() {
        let Json(body) = read_root().await;
        assert_eq!(body.message, "Latency analytics API is running");
    }
}
