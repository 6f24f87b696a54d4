//! 설계 케이스 한 건을 끝까지 계산한다:
//! 분리 사양 → FUG → 효율 보정 → 공급단 → 트레이/충전탑 사이징.

use crate::components::{relative_volatilities, Component, ComponentError};
use crate::design::efficiency::{self, EfficiencyError};
use crate::design::fug::{self, FeedStageLocation, FugError};
use crate::design::packed_sizing::{
    size_packed_column, PackedColumnInput, PackedColumnSizing, PackedSizingParams,
};
use crate::design::specification::{build_separation_spec, SeparationSpec, SpecError};
use crate::design::tray_sizing::{
    size_tray_column, SizingError, TrayColumnInput, TrayColumnSizing, TraySizingParams,
};
use crate::internals_db::{PackingData, TrayData};

/// 설계 계산 전 구간의 오류를 모은다.
#[derive(Debug)]
pub enum DesignError {
    Spec(SpecError),
    Fug(FugError),
    Efficiency(EfficiencyError),
    Sizing(SizingError),
    Component(ComponentError),
    /// 환류 배율은 1 이상이어야 최소 환류비 위에서 운전한다
    InvalidRefluxMultiplier(f64),
    /// 공급 기화율은 0~1 사이여야 한다
    InvalidVaporFraction(f64),
    /// 레지스트리 성분 수와 공급 조성 길이가 다름
    RegistrySize { registry: usize, composition: usize },
}

impl std::fmt::Display for DesignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DesignError::Spec(e) => write!(f, "분리 사양 오류: {e}"),
            DesignError::Fug(e) => write!(f, "FUG 계산 오류: {e}"),
            DesignError::Efficiency(e) => write!(f, "효율 계산 오류: {e}"),
            DesignError::Sizing(e) => write!(f, "사이징 오류: {e}"),
            DesignError::Component(e) => write!(f, "성분 테이블 오류: {e}"),
            DesignError::InvalidRefluxMultiplier(v) => {
                write!(f, "환류 배율은 1 이상이어야 합니다 (입력: {v}).")
            }
            DesignError::InvalidVaporFraction(v) => {
                write!(f, "공급 기화율은 0~1 사이여야 합니다 (입력: {v}).")
            }
            DesignError::RegistrySize {
                registry,
                composition,
            } => write!(
                f,
                "성분 레지스트리({registry}개)와 공급 조성({composition}개)의 길이가 다릅니다."
            ),
        }
    }
}

impl std::error::Error for DesignError {}

impl From<SpecError> for DesignError {
    fn from(value: SpecError) -> Self {
        DesignError::Spec(value)
    }
}

impl From<FugError> for DesignError {
    fn from(value: FugError) -> Self {
        DesignError::Fug(value)
    }
}

impl From<EfficiencyError> for DesignError {
    fn from(value: EfficiencyError) -> Self {
        DesignError::Efficiency(value)
    }
}

impl From<SizingError> for DesignError {
    fn from(value: SizingError) -> Self {
        DesignError::Sizing(value)
    }
}

impl From<ComponentError> for DesignError {
    fn from(value: ComponentError) -> Self {
        DesignError::Component(value)
    }
}

/// 설계 케이스 입력. 모든 고정 상수는 여기로 주입되며 전역 상태는 없다.
#[derive(Debug, Clone)]
pub struct DesignInput<'a> {
    pub feed_kmol_per_h: f64,
    pub feed_composition: &'a [f64],
    /// 공급 기화율 (액분율 = 1 − 기화율)
    pub vapor_fraction: f64,
    pub pressure_atm: f64,
    pub distillate_recoveries: &'a [f64],
    pub light_key: usize,
    pub heavy_key: usize,
    /// 운전 환류비 = 배율 × RR_min
    pub reflux_multiplier: f64,
    pub components: &'a [Component],
    pub tray: &'a TrayData,
    pub packing: &'a PackingData,
    pub tray_params: TraySizingParams,
    pub packed_params: PackedSizingParams,
}

/// 설계 케이스 결과. 계산 후에는 불변이다.
#[derive(Debug, Clone)]
pub struct ColumnDesign {
    pub spec: SeparationSpec,
    pub relative_volatility: Vec<f64>,
    pub min_stages: f64,
    pub theta: f64,
    pub min_reflux_ratio: f64,
    pub reflux_ratio: f64,
    pub theoretical_stages: f64,
    pub feed_viscosity_cp: f64,
    pub tray_efficiency: f64,
    pub real_stages: f64,
    pub tray_count: u32,
    pub feed_stage: FeedStageLocation,
    pub tray_column: TrayColumnSizing,
    pub packed_column: PackedColumnSizing,
}

/// 설계 케이스 한 건을 계산한다.
pub fn design_column(input: &DesignInput<'_>) -> Result<ColumnDesign, DesignError> {
    if !(input.reflux_multiplier >= 1.0) {
        return Err(DesignError::InvalidRefluxMultiplier(input.reflux_multiplier));
    }
    if !(0.0..=1.0).contains(&input.vapor_fraction) {
        return Err(DesignError::InvalidVaporFraction(input.vapor_fraction));
    }
    if input.components.len() != input.feed_composition.len() {
        return Err(DesignError::RegistrySize {
            registry: input.components.len(),
            composition: input.feed_composition.len(),
        });
    }
    let liquid_fraction = 1.0 - input.vapor_fraction;

    let spec = build_separation_spec(
        input.feed_kmol_per_h,
        input.feed_composition,
        input.distillate_recoveries,
        input.light_key,
        input.heavy_key,
    )?;
    let alpha = relative_volatilities(input.components)?;

    let min_stages = fug::fenske_min_stages(
        &spec.distillate_composition,
        &spec.bottoms_composition,
        spec.light_key,
        spec.heavy_key,
        &alpha,
    )?;
    let underwood = fug::underwood_min_reflux(
        &alpha,
        &spec.feed_composition,
        &spec.distillate_composition,
        liquid_fraction,
        spec.light_key,
        spec.heavy_key,
    )?;
    let reflux_ratio = input.reflux_multiplier * underwood.min_reflux_ratio;
    let theoretical_stages =
        fug::gilliland_stages(min_stages, reflux_ratio, underwood.min_reflux_ratio);

    let feed_viscosity_cp = efficiency::feed_viscosity_cp(&spec.feed_composition)?;
    let relative_key_volatility = alpha[spec.light_key] / alpha[spec.heavy_key];
    let tray_efficiency =
        efficiency::oconnell_efficiency(relative_key_volatility, feed_viscosity_cp)?;
    let real_stages = efficiency::real_stages(theoretical_stages, tray_efficiency)?;
    let tray_count = efficiency::design_tray_count(real_stages);

    let feed_stage = fug::feed_stage_location(
        &spec.distillate_composition,
        &spec.bottoms_composition,
        &spec.feed_composition,
        spec.light_key,
        spec.heavy_key,
        &alpha,
        min_stages,
        theoretical_stages,
        real_stages,
    )?;

    let tray_column = size_tray_column(TrayColumnInput {
        spec: &spec,
        components: input.components,
        tray_count,
        reflux_ratio,
        feed_liquid_fraction: liquid_fraction,
        pressure_atm: input.pressure_atm,
        tray: input.tray,
        params: input.tray_params,
    })?;

    let packed_column = size_packed_column(PackedColumnInput {
        spec: &spec,
        components: input.components,
        reflux_ratio,
        theoretical_stages,
        pressure_atm: input.pressure_atm,
        packing: input.packing,
        params: input.packed_params,
    })?;

    Ok(ColumnDesign {
        spec,
        relative_volatility: alpha,
        min_stages,
        theta: underwood.theta,
        min_reflux_ratio: underwood.min_reflux_ratio,
        reflux_ratio,
        theoretical_stages,
        feed_viscosity_cp,
        tray_efficiency,
        real_stages,
        tray_count,
        feed_stage,
        tray_column,
        packed_column,
    })
}
