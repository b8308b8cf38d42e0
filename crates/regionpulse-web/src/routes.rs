//! API 라우트 정의.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::AppState;

/// API 라우트 생성
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // 동작 확인
        .route("/", get(handlers::root::read_root))
        // 리전별 분석
        .route("/analytics", post(handlers::analytics::post_analytics))
}
