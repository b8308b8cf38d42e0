//! regionpulse 핵심 에러 타입.
//!
//! 어댑터 crate는 자체 에러 타입에서 `From<CoreError>`로 변환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 설정, 유효성 검증, 데이터 소스 로드 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 텔레메트리 데이터 소스 로드 실패 (파일 없음, 형식 오류)
    #[error("데이터 소스 에러: {source_name}: {message}")]
    DataSource {
        /// 소스 식별자 (파일 경로 등)
        source_name: String,
        /// 실패 사유
        message: String,
    },
}
