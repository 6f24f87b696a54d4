//! 밸브 트레이 탑의 직경/높이 산정.
//!
//! 일정 몰 유량(constant molar overflow) 가정으로 정류부/회수부 내부 유량을 구하고,
//! 구간별로 단순 범람 상관식 u_flood = C sqrt((ρL − ρV)/ρV) 를 적용한다.

use crate::components::{average_molar_mass, Component, ComponentError};
use crate::design::specification::SeparationSpec;
use crate::design::R_GAS_J_PER_MOL_K;
use crate::internals_db::TrayData;
use crate::units::{convert_pressure, PressureUnit};

/// 탑 사이징 오류.
#[derive(Debug)]
pub enum SizingError {
    /// 성분 물성 조회 실패
    Component(ComponentError),
    /// 액상 밀도가 기상 밀도보다 크지 않아 범람 속도가 정의되지 않음
    DensityInversion { liquid: f64, vapor: f64 },
    /// 계산 결과가 유한하지 않음
    NonFinite(&'static str),
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for SizingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizingError::Component(e) => write!(f, "성분 물성 오류: {e}"),
            SizingError::DensityInversion { liquid, vapor } => write!(
                f,
                "액상 밀도({liquid} kg/m3)가 기상 밀도({vapor} kg/m3)보다 커야 합니다."
            ),
            SizingError::NonFinite(what) => write!(f, "{what} 계산 결과가 유한하지 않습니다."),
            SizingError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for SizingError {}

impl From<ComponentError> for SizingError {
    fn from(value: ComponentError) -> Self {
        SizingError::Component(value)
    }
}

/// 트레이 탑 기하 파라미터. 기본값이 설계 기준이며 필요 시 호출부에서 바꾼다.
#[derive(Debug, Clone, Copy)]
pub struct TraySizingParams {
    /// 범람 속도 대비 운전 속도 비율
    pub flood_fraction: f64,
    /// 전체 단면적 대비 유효 면적 비율
    pub active_area_fraction: f64,
    /// 탑정 구간 온도 가정 [K]
    pub top_temperature_k: f64,
    /// 탑저 구간 온도 가정 [K]
    pub bottom_temperature_k: f64,
    /// 탑정 구간 액상 밀도 가정 [kg/m3]
    pub top_liquid_density_kg_per_m3: f64,
    /// 탑저 구간 액상 밀도 가정 [kg/m3]
    pub bottom_liquid_density_kg_per_m3: f64,
    /// 탑정/탑저 여유 높이 [m]
    pub extra_height_m: f64,
}

impl Default for TraySizingParams {
    fn default() -> Self {
        Self {
            flood_fraction: 0.75,
            active_area_fraction: 0.80,
            top_temperature_k: 370.0,
            bottom_temperature_k: 430.0,
            top_liquid_density_kg_per_m3: 650.0,
            bottom_liquid_density_kg_per_m3: 700.0,
            extra_height_m: 4.0,
        }
    }
}

/// 일정 몰 유량 가정의 내부 유량 [kmol/h].
#[derive(Debug, Clone, Copy)]
pub struct InternalFlows {
    pub rectifying_liquid_kmol_per_h: f64,
    pub rectifying_vapor_kmol_per_h: f64,
    pub stripping_liquid_kmol_per_h: f64,
    pub stripping_vapor_kmol_per_h: f64,
}

/// 환류비와 공급 액분율로 정류부/회수부 내부 유량을 계산한다.
pub fn constant_molar_overflow_flows(
    distillate_kmol_per_h: f64,
    reflux_ratio: f64,
    feed_kmol_per_h: f64,
    feed_liquid_fraction: f64,
) -> InternalFlows {
    let rectifying_liquid = reflux_ratio * distillate_kmol_per_h;
    let rectifying_vapor = (reflux_ratio + 1.0) * distillate_kmol_per_h;
    InternalFlows {
        rectifying_liquid_kmol_per_h: rectifying_liquid,
        rectifying_vapor_kmol_per_h: rectifying_vapor,
        stripping_liquid_kmol_per_h: rectifying_liquid + feed_liquid_fraction * feed_kmol_per_h,
        stripping_vapor_kmol_per_h: rectifying_vapor
            + (1.0 - feed_liquid_fraction) * feed_kmol_per_h,
    }
}

/// 구간(탑정 또는 탑저) 사이징 입력.
#[derive(Debug, Clone)]
pub struct TraySectionInput<'a> {
    pub liquid_kmol_per_h: f64,
    pub vapor_kmol_per_h: f64,
    /// 구간 기상 조성으로 쓰는 조성 벡터 (탑정: xD, 탑저: xB)
    pub vapor_composition: &'a [f64],
    pub components: &'a [Component],
    pub pressure_atm: f64,
    pub temperature_k: f64,
    pub liquid_density_kg_per_m3: f64,
    pub tray: &'a TrayData,
    pub flood_fraction: f64,
    pub active_area_fraction: f64,
}

/// 구간 사이징 결과.
#[derive(Debug, Clone, Copy)]
pub struct TraySection {
    pub liquid_kmol_per_h: f64,
    pub vapor_kmol_per_h: f64,
    /// 구간 온도 가정 [K]
    pub temperature_k: f64,
    pub vapor_molar_mass_kg_per_kmol: f64,
    pub vapor_density_kg_per_m3: f64,
    pub liquid_density_kg_per_m3: f64,
    pub flooding_velocity_m_per_s: f64,
    pub operating_velocity_m_per_s: f64,
    pub active_area_m2: f64,
    pub total_area_m2: f64,
    pub diameter_m: f64,
}

/// 한 구간의 직경을 범람 상관식으로 산정한다.
pub fn size_tray_section(input: TraySectionInput<'_>) -> Result<TraySection, SizingError> {
    if input.vapor_kmol_per_h <= 0.0 {
        return Err(SizingError::InvalidInput("기상 유량은 0보다 커야 합니다."));
    }
    if input.temperature_k <= 0.0 {
        return Err(SizingError::InvalidInput("온도는 0 K보다 커야 합니다."));
    }

    let molar_mass = average_molar_mass(input.vapor_composition, input.components)?;
    let pressure_pa = convert_pressure(input.pressure_atm, PressureUnit::Atm, PressureUnit::Pascal);
    // 이상기체: ρV = P M / (R T), M은 kg/mol로 환산
    let vapor_density =
        pressure_pa * (molar_mass / 1000.0) / (R_GAS_J_PER_MOL_K * input.temperature_k);
    let liquid_density = input.liquid_density_kg_per_m3;
    if liquid_density <= vapor_density {
        return Err(SizingError::DensityInversion {
            liquid: liquid_density,
            vapor: vapor_density,
        });
    }

    let flooding_velocity = input.tray.capacity_factor_m_per_s
        * ((liquid_density - vapor_density) / vapor_density).sqrt();
    let operating_velocity = input.flood_fraction * flooding_velocity;

    let vapor_mass_kg_per_s = input.vapor_kmol_per_h * molar_mass / 3600.0;
    let vapor_volumetric_m3_per_s = vapor_mass_kg_per_s / vapor_density;
    let active_area = vapor_volumetric_m3_per_s / operating_velocity;
    let total_area = active_area / input.active_area_fraction;
    let diameter = (4.0 * total_area / std::f64::consts::PI).sqrt();
    if !diameter.is_finite() {
        return Err(SizingError::NonFinite("직경"));
    }

    Ok(TraySection {
        liquid_kmol_per_h: input.liquid_kmol_per_h,
        vapor_kmol_per_h: input.vapor_kmol_per_h,
        temperature_k: input.temperature_k,
        vapor_molar_mass_kg_per_kmol: molar_mass,
        vapor_density_kg_per_m3: vapor_density,
        liquid_density_kg_per_m3: liquid_density,
        flooding_velocity_m_per_s: flooding_velocity,
        operating_velocity_m_per_s: operating_velocity,
        active_area_m2: active_area,
        total_area_m2: total_area,
        diameter_m: diameter,
    })
}

/// 트레이 탑 전체 사이징 입력.
#[derive(Debug, Clone)]
pub struct TrayColumnInput<'a> {
    pub spec: &'a SeparationSpec,
    pub components: &'a [Component],
    pub tray_count: u32,
    pub reflux_ratio: f64,
    pub feed_liquid_fraction: f64,
    pub pressure_atm: f64,
    pub tray: &'a TrayData,
    pub params: TraySizingParams,
}

/// 트레이 탑 사이징 결과.
#[derive(Debug, Clone)]
pub struct TrayColumnSizing {
    pub tray_count: u32,
    pub top: TraySection,
    pub bottom: TraySection,
    /// 두 구간을 모두 수용하는 채택 직경 [m]
    pub diameter_m: f64,
    pub active_height_m: f64,
    pub total_height_m: f64,
}

/// 트레이 탑의 직경과 높이를 산정한다.
/// 탑 직경은 탑정/탑저 구간 직경 중 큰 값을 채택한다.
pub fn size_tray_column(input: TrayColumnInput<'_>) -> Result<TrayColumnSizing, SizingError> {
    if input.tray_count == 0 {
        return Err(SizingError::InvalidInput("트레이 수는 1 이상이어야 합니다."));
    }

    let flows = constant_molar_overflow_flows(
        input.spec.distillate_kmol_per_h,
        input.reflux_ratio,
        input.spec.feed_kmol_per_h,
        input.feed_liquid_fraction,
    );

    let top = size_tray_section(TraySectionInput {
        liquid_kmol_per_h: flows.rectifying_liquid_kmol_per_h,
        vapor_kmol_per_h: flows.rectifying_vapor_kmol_per_h,
        vapor_composition: &input.spec.distillate_composition,
        components: input.components,
        pressure_atm: input.pressure_atm,
        temperature_k: input.params.top_temperature_k,
        liquid_density_kg_per_m3: input.params.top_liquid_density_kg_per_m3,
        tray: input.tray,
        flood_fraction: input.params.flood_fraction,
        active_area_fraction: input.params.active_area_fraction,
    })?;

    let bottom = size_tray_section(TraySectionInput {
        liquid_kmol_per_h: flows.stripping_liquid_kmol_per_h,
        vapor_kmol_per_h: flows.stripping_vapor_kmol_per_h,
        vapor_composition: &input.spec.bottoms_composition,
        components: input.components,
        pressure_atm: input.pressure_atm,
        temperature_k: input.params.bottom_temperature_k,
        liquid_density_kg_per_m3: input.params.bottom_liquid_density_kg_per_m3,
        tray: input.tray,
        flood_fraction: input.params.flood_fraction,
        active_area_fraction: input.params.active_area_fraction,
    })?;

    let active_height = (input.tray_count as f64 - 1.0) * input.tray.spacing_m;
    Ok(TrayColumnSizing {
        tray_count: input.tray_count,
        diameter_m: top.diameter_m.max(bottom.diameter_m),
        top,
        bottom,
        active_height_m: active_height,
        total_height_m: active_height + input.params.extra_height_m,
    })
}
