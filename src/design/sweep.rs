//! 환류비 민감도 분석: 배율별로 환류비 → 단수 → 사이징 사슬을 독립 재계산한다.
//! 반복 간에 공유 상태가 없으므로 각 행은 서로 영향을 주지 않는다.

use crate::design::column::{ColumnDesign, DesignError, DesignInput};
use crate::design::efficiency;
use crate::design::fug;
use crate::design::tray_sizing::{size_tray_column, TrayColumnInput, TrayColumnSizing};

/// 배율 한 건의 재계산 결과.
#[derive(Debug, Clone)]
pub struct SweepCase {
    pub multiplier: f64,
    pub reflux_ratio: f64,
    pub theoretical_stages: f64,
    pub real_stages: f64,
    pub tray_count: u32,
    pub sizing: TrayColumnSizing,
}

/// 기준 설계의 RR_min/N_min/효율을 고정한 채 배율 목록을 훑는다.
pub fn reflux_sensitivity(
    input: &DesignInput<'_>,
    base: &ColumnDesign,
    multipliers: &[f64],
) -> Result<Vec<SweepCase>, DesignError> {
    let mut cases = Vec::with_capacity(multipliers.len());
    for &multiplier in multipliers {
        if !(multiplier >= 1.0) {
            return Err(DesignError::InvalidRefluxMultiplier(multiplier));
        }
        let reflux_ratio = multiplier * base.min_reflux_ratio;
        let theoretical_stages =
            fug::gilliland_stages(base.min_stages, reflux_ratio, base.min_reflux_ratio);
        let real_stages = efficiency::real_stages(theoretical_stages, base.tray_efficiency)?;
        let tray_count = efficiency::design_tray_count(real_stages);

        let sizing = size_tray_column(TrayColumnInput {
            spec: &base.spec,
            components: input.components,
            tray_count,
            reflux_ratio,
            feed_liquid_fraction: 1.0 - input.vapor_fraction,
            pressure_atm: input.pressure_atm,
            tray: input.tray,
            params: input.tray_params,
        })?;

        cases.push(SweepCase {
            multiplier,
            reflux_ratio,
            theoretical_stages,
            real_stages,
            tray_count,
            sizing,
        });
    }
    Ok(cases)
}
