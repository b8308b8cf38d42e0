//! 시작 경로 통합 테스트.
//!
//! 설정 파일 → 데이터 파일 로드 → 라우터 와이어링 검증.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use regionpulse_core::config::AppConfig;
use regionpulse_storage::TelemetryStore;
use regionpulse_web::{app, AppState};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const DATASET: &str = r#"[
    {"region": "us-east", "latency_ms": 100, "uptime": 0.99},
    {"region": "us-east", "latency_ms": 200, "uptime": 0.95},
    {"region": "emea", "latency_ms": 140.5, "uptime": 0.98}
]"#;

fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
    let data_path = dir.path().join("telemetry.json");
    fs::write(&data_path, DATASET).unwrap();

    let config_path = dir.path().join("config.json");
    let config = serde_json::json!({
        "web": {"port": 8123},
        "data": {"telemetry_path": data_path}
    });
    fs::write(&config_path, config.to_string()).unwrap();
    config_path
}

#[test]
fn config_file_points_at_dataset() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from_file(&write_fixture(&dir)).unwrap();
    config.validate().unwrap();

    let store = TelemetryStore::load(&config.data.telemetry_path).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(store.regions(), vec!["emea", "us-east"]);
    assert_eq!(config.web.port, 8123);
}

#[test]
fn missing_dataset_prevents_startup() {
    let dir = TempDir::new().unwrap();
    let result = TelemetryStore::load(dir.path().join("q-vercel-latency.json"));
    assert!(result.is_err());
}

#[test]
fn malformed_dataset_prevents_startup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"[{"region": "us-east", "latency_ms": 100}]"#).unwrap();
    assert!(TelemetryStore::load(&path).is_err());
}

#[tokio::test]
async fn loaded_store_serves_analytics() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::load_from_file(&write_fixture(&dir)).unwrap();
    let store = TelemetryStore::load(&config.data.telemetry_path).unwrap();
    let router = app(AppState::new(Arc::new(store)));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/analytics")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"regions": ["us-east", "emea"], "threshold_ms": 150}"#,
        ))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["us-east"]["breaches"], 1);
    assert_eq!(body["emea"]["breaches"], 0);
    assert_eq!(body["emea"]["avg_latency"], 140.5);
    assert_eq!(body["emea"]["p95_latency"], 140.5);
}
