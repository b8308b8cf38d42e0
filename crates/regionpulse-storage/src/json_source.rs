//! JSON 파일 데이터 소스.
//!
//! `[{"region": ..., "latency_ms": ..., "uptime": ...}, ...]` 형식의 배열을 읽는다.

use regionpulse_core::error::CoreError;
use regionpulse_core::models::telemetry::TelemetryRecord;
use regionpulse_core::ports::source::TelemetrySource;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// JSON 파일 기반 텔레메트리 소스
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// 새 소스 생성 (파일은 `load` 시점에 읽음)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TelemetrySource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<TelemetryRecord>, CoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| CoreError::DataSource {
            source_name: self.describe(),
            message: format!("파일 읽기 실패: {e}"),
        })?;

        let records: Vec<TelemetryRecord> =
            serde_json::from_str(&content).map_err(|e| CoreError::DataSource {
                source_name: self.describe(),
                message: format!("JSON 파싱 실패: {e}"),
            })?;

        debug!("텔레메트리 파일 읽기 완료: {} ({}건)", self.describe(), records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records_in_file_order() {
        let file = write_temp(
            r#"[
                {"region": "apac", "latency_ms": 120.5, "uptime": 98.2},
                {"region": "emea", "latency_ms": 90, "uptime": 99.1}
            ]"#,
        );
        let records = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], TelemetryRecord::new("apac", 120.5, 98.2));
        assert_eq!(records[1].region, "emea");
    }

    #[test]
    fn empty_array_is_valid() {
        let file = write_temp("[]");
        assert!(JsonFileSource::new(file.path()).load().unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_data_source_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));
        let err = source.load().unwrap_err();
        match err {
            CoreError::DataSource { source_name, .. } => {
                assert!(source_name.ends_with("absent.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_data_source_error() {
        let file = write_temp(r#"[{"region": "apac", "latency_ms": "#);
        let err = JsonFileSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, CoreError::DataSource { .. }));
    }

    #[test]
    fn wrong_field_type_is_data_source_error() {
        let file = write_temp(r#"[{"region": "apac", "latency_ms": "fast", "uptime": 0.9}]"#);
        let err = JsonFileSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, CoreError::DataSource { .. }));
    }

    #[test]
    fn non_array_root_is_data_source_error() {
        let file = write_temp(r#"{"region": "apac", "latency_ms": 1, "uptime": 0.9}"#);
        assert!(JsonFileSource::new(file.path()).load().is_err());
    }
}
