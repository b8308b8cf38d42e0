//! # regionpulse-storage
//!
//! 텔레메트리 저장소 어댑터.
//! 프로세스 시작 시 데이터 소스를 한 번 읽어 메모리에 고정한다.
//!
//! ## 모듈
//! - `json_source`: JSON 파일 데이터 소스 (TelemetrySource 구현)
//! - `store`: 읽기 전용 인메모리 저장소

pub mod json_source;
pub mod store;

pub use json_source::JsonFileSource;
pub use store::TelemetryStore;
