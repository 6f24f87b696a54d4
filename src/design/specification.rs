//! 분리 사양: 회수율 정책으로부터 탑정/탑저 물질수지와 키 성분을 확정한다.

/// 이 설계가 전제하는 성분 수 (n-C5, n-C6, n-C7, n-C9, n-C10).
pub const COMPONENT_COUNT: usize = 5;

/// 공급 조성 합이 1에서 벗어나도 허용하는 절대 오차.
pub const COMPOSITION_TOLERANCE: f64 = 1e-6;

/// 분리 사양. 생성 이후에는 불변이며 하류 단계가 참조로 공유한다.
#[derive(Debug, Clone)]
pub struct SeparationSpec {
    /// 공급 유량 [kmol/h]
    pub feed_kmol_per_h: f64,
    /// 공급 조성 [mol/mol]
    pub feed_composition: Vec<f64>,
    /// 성분별 공급 유량 [kmol/h]
    pub feed_component_kmol_per_h: Vec<f64>,
    /// 탑정 유량 [kmol/h]
    pub distillate_kmol_per_h: f64,
    /// 탑저 유량 [kmol/h]
    pub bottoms_kmol_per_h: f64,
    /// 성분별 탑정 유량 [kmol/h]
    pub distillate_component_kmol_per_h: Vec<f64>,
    /// 성분별 탑저 유량 [kmol/h]
    pub bottoms_component_kmol_per_h: Vec<f64>,
    /// 탑정 조성 [mol/mol]
    pub distillate_composition: Vec<f64>,
    /// 탑저 조성 [mol/mol]
    pub bottoms_composition: Vec<f64>,
    /// 성분별 탑정 회수율 [-]
    pub distillate_recoveries: Vec<f64>,
    /// 경질 키 성분 인덱스 (0..COMPONENT_COUNT)
    pub light_key: usize,
    /// 중질 키 성분 인덱스 (0..COMPONENT_COUNT)
    pub heavy_key: usize,
}

/// 분리 사양 구성 중 발생 가능한 오류. 모두 입력 오류이며 복구하지 않는다.
#[derive(Debug)]
pub enum SpecError {
    /// 공급 조성 벡터 길이가 성분 수와 다름
    ComponentCount(usize),
    /// 회수율 정책 길이가 성분 수와 다름
    RecoveryCount(usize),
    /// 공급 조성 합이 1이 아님 (실제 합을 담는다)
    CompositionSum(f64),
    /// 공급 유량이 0 이하
    NonPositiveFeed(f64),
    /// 키 성분 인덱스가 범위를 벗어나거나 순서가 잘못됨
    KeyOrder { light_key: usize, heavy_key: usize },
    /// 회수율 정책이 탑정 또는 탑저 유량을 0으로 만들어 조성이 정의되지 않음
    DegenerateSplit { distillate: f64, bottoms: f64 },
}

impl std::fmt::Display for SpecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecError::ComponentCount(n) => {
                write!(f, "공급 조성은 {COMPONENT_COUNT}개 성분이어야 합니다 (입력: {n}개).")
            }
            SpecError::RecoveryCount(n) => {
                write!(f, "회수율 정책은 {COMPONENT_COUNT}개 값이어야 합니다 (입력: {n}개).")
            }
            SpecError::CompositionSum(sum) => {
                write!(f, "공급 조성 합이 1이 아닙니다 (합: {sum:.7}).")
            }
            SpecError::NonPositiveFeed(v) => {
                write!(f, "공급 유량은 0보다 커야 합니다 (입력: {v}).")
            }
            SpecError::KeyOrder {
                light_key,
                heavy_key,
            } => write!(
                f,
                "키 성분 인덱스가 잘못되었습니다 (LK={light_key}, HK={heavy_key})."
            ),
            SpecError::DegenerateSplit {
                distillate,
                bottoms,
            } => write!(
                f,
                "탑정/탑저 유량이 모두 양수여야 합니다 (D={distillate}, B={bottoms})."
            ),
        }
    }
}

impl std::error::Error for SpecError {}

/// 탑정 회수율 정책으로 분리 사양을 구성한다.
///
/// 성분별 탑정 유량 D_i = F_i * R_i, 탑저 유량 B_i = F_i - D_i 로서
/// 성분별 물질수지 F_i = D_i + B_i 는 구성상 항상 성립한다.
pub fn build_separation_spec(
    feed_kmol_per_h: f64,
    feed_composition: &[f64],
    distillate_recoveries: &[f64],
    light_key: usize,
    heavy_key: usize,
) -> Result<SeparationSpec, SpecError> {
    if feed_composition.len() != COMPONENT_COUNT {
        return Err(SpecError::ComponentCount(feed_composition.len()));
    }
    if distillate_recoveries.len() != COMPONENT_COUNT {
        return Err(SpecError::RecoveryCount(distillate_recoveries.len()));
    }
    if !(feed_kmol_per_h > 0.0) {
        return Err(SpecError::NonPositiveFeed(feed_kmol_per_h));
    }
    let sum: f64 = feed_composition.iter().sum();
    if (sum - 1.0).abs() > COMPOSITION_TOLERANCE {
        return Err(SpecError::CompositionSum(sum));
    }
    if light_key >= COMPONENT_COUNT || heavy_key >= COMPONENT_COUNT || light_key >= heavy_key {
        return Err(SpecError::KeyOrder {
            light_key,
            heavy_key,
        });
    }

    let feed_component: Vec<f64> = feed_composition
        .iter()
        .map(|z| feed_kmol_per_h * z)
        .collect();
    let distillate_component: Vec<f64> = feed_component
        .iter()
        .zip(distillate_recoveries)
        .map(|(fi, ri)| fi * ri)
        .collect();
    let bottoms_component: Vec<f64> = feed_component
        .iter()
        .zip(&distillate_component)
        .map(|(fi, di)| fi - di)
        .collect();

    let distillate: f64 = distillate_component.iter().sum();
    let bottoms: f64 = bottoms_component.iter().sum();
    if !(distillate > 0.0) || !(bottoms > 0.0) {
        return Err(SpecError::DegenerateSplit {
            distillate,
            bottoms,
        });
    }

    let distillate_composition = distillate_component.iter().map(|d| d / distillate).collect();
    let bottoms_composition = bottoms_component.iter().map(|b| b / bottoms).collect();

    Ok(SeparationSpec {
        feed_kmol_per_h,
        feed_composition: feed_composition.to_vec(),
        feed_component_kmol_per_h: feed_component,
        distillate_kmol_per_h: distillate,
        bottoms_kmol_per_h: bottoms,
        distillate_component_kmol_per_h: distillate_component,
        bottoms_component_kmol_per_h: bottoms_component,
        distillate_composition,
        bottoms_composition,
        distillate_recoveries: distillate_recoveries.to_vec(),
        light_key,
        heavy_key,
    })
}
