//! 통계 엔진.
//!
//! 평균과 선형 보간 백분위수를 계산하는 순수 함수.
//! 빈 입력은 에러 없이 `0.0`을 반환한다.

/// 산술 평균 (빈 입력 → `0.0`)
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 선형 보간 백분위수
///
/// 오름차순 정렬 후 순위 `k = (p / 100) * (n - 1)`을 계산하고,
/// `k`가 정수가 아니면 `floor(k)`와 `ceil(k)` 위치의 값을 보간한다.
///
/// # Arguments
/// * `values` - 측정값 (정렬 불필요, 원본은 변경하지 않음)
/// * `p` - 백분위 (0–100, 범위 밖은 경계로 고정, NaN은 0으로 처리)
///
/// # Returns
/// 백분위 값, 빈 입력이면 `0.0`
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 100.0) };
    let k = (p / 100.0) * (sorted.len() - 1) as f64;
    let f = k.floor();
    let c = k.ceil();

    let lower = sorted[f as usize];
    if f == c {
        return lower;
    }
    let upper = sorted[c as usize];
    lower + (upper - lower) * (k - f)
}
