//! # regionpulse-core
//!
//! 리전별 지연/가용성 텔레메트리 집계의 핵심 타입과 순수 함수.
//! 다른 모든 crate가 공유하는 모델, 통계 엔진, 집계기, 포트를 제공한다.
//!
//! ## 구조
//!
//! - [`models`]: 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`stats`]: 평균, 선형 보간 백분위수
//! - [`aggregate`]: 리전별 요약 통계 집계
//! - [`ports`]: 텔레메트리 데이터 소스 인터페이스
//! - [`error`]: 핵심 에러 타입 (thiserror)
//! - [`config`]: 애플리케이션 설정 구조체

pub mod aggregate;
pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod stats;

#[cfg(test)]
mod tests {
    use crate::aggregate::aggregate;
    use crate::models::analytics::AnalyticsRequest;
    use crate::models::telemetry::TelemetryRecord;

    #[test]
    fn request_to_report_end_to_end() {
        let records: Vec<TelemetryRecord> = serde_json::from_str(
            r#"[
                {"region": "us-east", "latency_ms": 100, "uptime": 0.99},
                {"region": "us-east", "latency_ms": 200, "uptime": 0.95}
            ]"#,
        )
        .unwrap();
        let request: AnalyticsRequest =
            serde_json::from_str(r#"{"regions": ["us-east"], "threshold_ms": 150}"#).unwrap();
        request.validate().unwrap();

        let report = aggregate(&records, request.regions.as_slice(), request.threshold_ms);
        let json = serde_json::to_value(&report).unwrap();

        let summary = &json["us-east"];
        assert_eq!(summary["avg_latency"].as_f64().unwrap(), 150.0);
        assert!((summary["p95_latency"].as_f64().unwrap() - 195.0).abs() < 1e-9);
        assert!((summary["avg_uptime"].as_f64().unwrap() - 0.97).abs() < 1e-9);
        assert_eq!(summary["breaches"].as_u64().unwrap(), 1);
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.web.port, 8000);
        assert!(!config.web.allow_external);
        assert_eq!(
            config.data.telemetry_path,
            std::path::PathBuf::from("q-vercel-latency.json")
        );
    }
}
