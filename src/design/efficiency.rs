//! O'Connell 상관식 기반 전체 트레이 효율과 실제단수 환산.

use crate::design::specification::COMPONENT_COUNT;

/// 성분별 기준 점도 [cP] (25°C 부근 문헌값, n-C5 ~ n-C10 순).
pub const REFERENCE_VISCOSITY_CP: [f64; COMPONENT_COUNT] = [0.224, 0.295, 0.389, 0.665, 0.850];

/// 효율 계산 오류. 모두 비물리적 입력을 뜻하며 보정하지 않는다.
#[derive(Debug)]
pub enum EfficiencyError {
    /// 공급 조성 벡터 길이가 성분 수와 다름
    ComponentCount(usize),
    /// α_rel × μ_F 가 0 이하 — 비물리적 입력
    NonPhysicalInput(f64),
    /// 효율이 0 이하
    NonPositiveEfficiency(f64),
}

impl std::fmt::Display for EfficiencyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EfficiencyError::ComponentCount(n) => {
                write!(f, "공급 조성은 {COMPONENT_COUNT}개 성분이어야 합니다 (입력: {n}개).")
            }
            EfficiencyError::NonPhysicalInput(v) => {
                write!(f, "α_rel × μ_F 는 0보다 커야 합니다 (값: {v}).")
            }
            EfficiencyError::NonPositiveEfficiency(v) => {
                write!(f, "트레이 효율은 0보다 커야 합니다 (값: {v}).")
            }
        }
    }
}

impl std::error::Error for EfficiencyError {}

/// 공급 조성으로 가중한 선형 혼합 점도 [cP]를 추정한다.
/// 엄밀한 혼합 점도 모델이 아니라 O'Connell 입력용 근사이다.
pub fn feed_viscosity_cp(feed_composition: &[f64]) -> Result<f64, EfficiencyError> {
    if feed_composition.len() != COMPONENT_COUNT {
        return Err(EfficiencyError::ComponentCount(feed_composition.len()));
    }
    Ok(feed_composition
        .iter()
        .zip(REFERENCE_VISCOSITY_CP.iter())
        .map(|(z, mu)| z * mu)
        .sum())
}

/// O'Connell 상관식: η_G = 0.492 (α_rel μ_F)^(−0.245)
pub fn oconnell_efficiency(
    relative_volatility: f64,
    feed_viscosity_cp: f64,
) -> Result<f64, EfficiencyError> {
    let alpha_mu = relative_volatility * feed_viscosity_cp;
    if alpha_mu <= 0.0 {
        return Err(EfficiencyError::NonPhysicalInput(alpha_mu));
    }
    Ok(0.492 * alpha_mu.powf(-0.245))
}

/// 이론단수를 효율로 나눠 실제단수를 구한다.
pub fn real_stages(theoretical_stages: f64, efficiency: f64) -> Result<f64, EfficiencyError> {
    if efficiency <= 0.0 {
        return Err(EfficiencyError::NonPositiveEfficiency(efficiency));
    }
    Ok(theoretical_stages / efficiency)
}

/// 설계 트레이 수 = 실제단수의 올림.
pub fn design_tray_count(real_stages: f64) -> u32 {
    real_stages.ceil() as u32
}
