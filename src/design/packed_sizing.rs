//! 랜덤 충전탑(Intalox Saddles)의 Leva 범람 상관식 기반 사이징.
//!
//! 탑정 구간 데이터만 사용한다: 탑정 유량/조성, 운전 환류비, 이론단수.
//! Leva 상관식은 야드파운드 단위 기준이므로 결과 속도를 m/s로 변환한다.

use crate::components::{average_molar_mass, Component};
use crate::design::specification::SeparationSpec;
use crate::design::tray_sizing::SizingError;
use crate::design::R_GAS_J_PER_MOL_K;
use crate::internals_db::PackingData;
use crate::units::{convert_pressure, convert_velocity, PressureUnit, VelocityUnit};

/// 충전탑 사이징 파라미터. 기본값이 설계 기준이다.
#[derive(Debug, Clone, Copy)]
pub struct PackedSizingParams {
    /// 탑정 온도 가정 [K]
    pub top_temperature_k: f64,
    /// 액상 밀도 가정 [kg/m3]
    pub liquid_density_kg_per_m3: f64,
    /// 액상 점도 가정 [cP]
    pub liquid_viscosity_cp: f64,
    /// 범람 속도 대비 운전 속도 비율 (트레이 기본값 0.75와 다름)
    pub flood_fraction: f64,
    /// 탑정/탑저 여유 높이 [m]
    pub extra_height_m: f64,
    /// Leva 밀도비 항의 물 밀도 기준값 [kg/m3]
    pub water_density_kg_per_m3: f64,
}

impl Default for PackedSizingParams {
    fn default() -> Self {
        Self {
            top_temperature_k: 370.0,
            liquid_density_kg_per_m3: 630.0,
            liquid_viscosity_cp: 0.5,
            flood_fraction: 0.70,
            extra_height_m: 2.0,
            water_density_kg_per_m3: 995.6,
        }
    }
}

/// 충전탑 사이징 입력.
#[derive(Debug, Clone)]
pub struct PackedColumnInput<'a> {
    pub spec: &'a SeparationSpec,
    pub components: &'a [Component],
    pub reflux_ratio: f64,
    pub theoretical_stages: f64,
    pub pressure_atm: f64,
    pub packing: &'a PackingData,
    pub params: PackedSizingParams,
}

/// 충전탑 사이징 결과.
#[derive(Debug, Clone, Copy)]
pub struct PackedColumnSizing {
    pub top_molar_mass_kg_per_kmol: f64,
    pub vapor_density_kg_per_m3: f64,
    pub liquid_density_kg_per_m3: f64,
    /// 흐름 파라미터 F_LV = (L/V) sqrt(ρV/ρL)
    pub flow_parameter: f64,
    /// Leva 상관식의 Y 값
    pub leva_y: f64,
    pub flooding_velocity_m_per_s: f64,
    pub operating_velocity_m_per_s: f64,
    pub area_m2: f64,
    pub diameter_m: f64,
    pub packed_height_m: f64,
    pub total_height_m: f64,
}

/// Leva 법으로 충전탑의 직경과 충전 높이를 산정한다.
pub fn size_packed_column(input: PackedColumnInput<'_>) -> Result<PackedColumnSizing, SizingError> {
    if input.reflux_ratio <= 0.0 {
        return Err(SizingError::InvalidInput("환류비는 0보다 커야 합니다."));
    }
    if input.theoretical_stages <= 0.0 {
        return Err(SizingError::InvalidInput("이론단수는 0보다 커야 합니다."));
    }

    let spec = input.spec;
    let params = input.params;

    let molar_mass = average_molar_mass(&spec.distillate_composition, input.components)?;
    let pressure_kpa =
        convert_pressure(input.pressure_atm, PressureUnit::Atm, PressureUnit::KiloPascal);
    // kPa·(kg/kmol)/(kJ/(kmol·K)·K) = kg/m3
    let vapor_density = pressure_kpa * molar_mass / (R_GAS_J_PER_MOL_K * params.top_temperature_k);
    let liquid_density = params.liquid_density_kg_per_m3;

    let liquid_mass_kg_per_h = input.reflux_ratio * spec.distillate_kmol_per_h * molar_mass;
    let vapor_mass_kg_per_h = (input.reflux_ratio + 1.0) * spec.distillate_kmol_per_h * molar_mass;

    let flow_parameter =
        (liquid_mass_kg_per_h / vapor_mass_kg_per_h) * (vapor_density / liquid_density).sqrt();
    if !(flow_parameter > 0.0) || !flow_parameter.is_finite() {
        return Err(SizingError::NonFinite("흐름 파라미터 F_LV"));
    }

    let ln_flv = flow_parameter.ln();
    let leva_y = (-3.7121 - 1.0371 * ln_flv - 0.1501 * ln_flv.powi(2)
        - 0.007544 * ln_flv.powi(3))
    .exp();

    let density_ratio = params.water_density_kg_per_m3 / liquid_density;
    let f1 = -0.8787 + 2.6776 * density_ratio - 0.6313 * density_ratio.powi(2);
    let f2 = 0.96 * params.liquid_viscosity_cp.powf(0.19);

    let flood_sq = 32.2 * leva_y * (params.water_density_kg_per_m3 / vapor_density)
        / (input.packing.packing_factor * f1 * f2);
    if !(flood_sq > 0.0) || !flood_sq.is_finite() {
        return Err(SizingError::NonFinite("범람 속도"));
    }
    let flooding_velocity = convert_velocity(
        flood_sq.sqrt(),
        VelocityUnit::FootPerSecond,
        VelocityUnit::MeterPerSecond,
    );
    let operating_velocity = params.flood_fraction * flooding_velocity;

    let vapor_mass_kg_per_s = vapor_mass_kg_per_h / 3600.0;
    let mass_flux = vapor_density * operating_velocity;
    let area = vapor_mass_kg_per_s / mass_flux;
    let diameter = (4.0 * area / std::f64::consts::PI).sqrt();
    if !diameter.is_finite() {
        return Err(SizingError::NonFinite("직경"));
    }

    let packed_height = input.theoretical_stages * input.packing.hetp_m;

    Ok(PackedColumnSizing {
        top_molar_mass_kg_per_kmol: molar_mass,
        vapor_density_kg_per_m3: vapor_density,
        liquid_density_kg_per_m3: liquid_density,
        flow_parameter,
        leva_y,
        flooding_velocity_m_per_s: flooding_velocity,
        operating_velocity_m_per_s: operating_velocity,
        area_m2: area,
        diameter_m: diameter,
        packed_height_m: packed_height,
        total_height_m: packed_height + params.extra_height_m,
    })
}
