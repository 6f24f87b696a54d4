use distillation_design_toolbox::components::{builtin_components, Component};
use distillation_design_toolbox::design::column::{design_column, DesignInput};
use distillation_design_toolbox::design::fug::underwood_balance;
use distillation_design_toolbox::design::sweep::reflux_sensitivity;
use distillation_design_toolbox::internals_db::{self, PackingData, TrayData};

const FEED_COMPOSITION: [f64; 5] = [0.05, 0.10, 0.25, 0.30, 0.30];
const RECOVERIES: [f64; 5] = [0.999, 0.995, 0.60, 0.05, 0.001];

fn base_input<'a>(
    comps: &'a [Component],
    tray: &'a TrayData,
    packing: &'a PackingData,
) -> DesignInput<'a> {
    DesignInput {
        feed_kmol_per_h: 1000.0,
        feed_composition: &FEED_COMPOSITION,
        vapor_fraction: 0.2,
        pressure_atm: 2.0,
        distillate_recoveries: &RECOVERIES,
        light_key: 2,
        heavy_key: 3,
        reflux_multiplier: 1.3,
        components: comps,
        tray,
        packing,
        tray_params: Default::default(),
        packed_params: Default::default(),
    }
}

#[test]
fn worked_case_full_pipeline() {
    let comps = builtin_components().expect("builtin components");
    let tray = internals_db::find_tray("valve").expect("valve tray");
    let packing = internals_db::find_packing("intalox_saddles_1in").expect("intalox packing");
    let design = design_column(&base_input(&comps, tray, packing)).expect("design case");

    // 물질수지
    assert!((design.spec.distillate_kmol_per_h - 314.75).abs() < 1e-9);
    assert!((design.spec.bottoms_kmol_per_h - 685.25).abs() < 1e-9);

    // FUG
    assert!(
        (design.min_stages - 10.294).abs() < 0.01,
        "N_min={}",
        design.min_stages
    );
    assert!(design.theta > 1.3 && design.theta < 1.8, "theta={}", design.theta);
    let residual = underwood_balance(design.theta, &design.relative_volatility, &FEED_COMPOSITION, 0.8);
    assert!(residual.abs() <= 1e-10, "residual={residual:e}");
    assert!(
        design.min_reflux_ratio.is_finite() && design.min_reflux_ratio > 0.0,
        "RR_min={}",
        design.min_reflux_ratio
    );
    assert!(
        (design.reflux_ratio - 1.3 * design.min_reflux_ratio).abs() < 1e-12,
        "RR={}",
        design.reflux_ratio
    );
    assert!(
        design.theoretical_stages > design.min_stages,
        "N={} N_min={}",
        design.theoretical_stages,
        design.min_stages
    );

    // 효율 보정: 효율 < 1 이므로 실제단수가 이론단수보다 많다.
    assert!((design.feed_viscosity_cp - 0.59245).abs() < 1e-12);
    assert!(design.tray_efficiency > 0.0 && design.tray_efficiency < 1.0);
    assert!(design.real_stages > design.theoretical_stages);
    assert_eq!(design.tray_count, 39);
    assert_eq!(design.feed_stage.actual_tray, 31);
    assert!(
        (design.feed_stage.theoretical_stage - 15.7).abs() < 0.05,
        "feed stage={}",
        design.feed_stage.theoretical_stage
    );

    // 트레이 탑: 두 구간 모두 양의 유한한 크기를 가진다.
    for section in [&design.tray_column.top, &design.tray_column.bottom] {
        assert!(section.vapor_density_kg_per_m3 > 0.0);
        assert!(section.flooding_velocity_m_per_s.is_finite());
        assert!(section.diameter_m.is_finite() && section.diameter_m > 0.0);
    }
    assert!(design.tray_column.bottom.diameter_m > design.tray_column.top.diameter_m);
    assert!(
        (design.tray_column.diameter_m - design.tray_column.bottom.diameter_m).abs() < 1e-12
    );
    assert!(
        design.tray_column.diameter_m > 3.0 && design.tray_column.diameter_m < 4.5,
        "D={}",
        design.tray_column.diameter_m
    );
    assert!((design.tray_column.total_height_m - 23.0).abs() < 1e-9);

    // 충전탑
    assert!(
        design.packed_column.diameter_m > 3.5 && design.packed_column.diameter_m < 5.0,
        "D={}",
        design.packed_column.diameter_m
    );
    assert!(design.packed_column.packed_height_m > 0.0);
    assert!(
        design.packed_column.total_height_m > design.packed_column.packed_height_m
    );
}

#[test]
fn pipeline_is_deterministic() {
    let comps = builtin_components().expect("builtin components");
    let tray = internals_db::find_tray("valve").expect("valve tray");
    let packing = internals_db::find_packing("intalox_saddles_1in").expect("intalox packing");
    let input = base_input(&comps, tray, packing);
    let first = design_column(&input).expect("first run");
    let second = design_column(&input).expect("second run");

    // 숨은 상태가 없으므로 결과는 비트 단위로 동일하다.
    assert_eq!(first.theta, second.theta);
    assert_eq!(first.min_reflux_ratio, second.min_reflux_ratio);
    assert_eq!(first.theoretical_stages, second.theoretical_stages);
    assert_eq!(first.real_stages, second.real_stages);
    assert_eq!(first.tray_count, second.tray_count);
    assert_eq!(first.tray_column.diameter_m, second.tray_column.diameter_m);
    assert_eq!(first.packed_column.diameter_m, second.packed_column.diameter_m);
}

#[test]
fn reflux_sweep_trades_stages_for_diameter() {
    let comps = builtin_components().expect("builtin components");
    let tray = internals_db::find_tray("valve").expect("valve tray");
    let packing = internals_db::find_packing("intalox_saddles_1in").expect("intalox packing");
    let input = base_input(&comps, tray, packing);
    let design = design_column(&input).expect("design case");

    let multipliers = [1.10, 1.30, 1.50, 2.00];
    let cases = reflux_sensitivity(&input, &design, &multipliers).expect("sweep");
    assert_eq!(cases.len(), multipliers.len());

    for pair in cases.windows(2) {
        // 환류비가 커질수록 단수는 줄고 증기 부하(직경)는 커진다.
        assert!(pair[0].theoretical_stages > pair[1].theoretical_stages);
        assert!(pair[0].tray_count >= pair[1].tray_count);
        assert!(pair[0].sizing.diameter_m < pair[1].sizing.diameter_m);
    }

    // 1.30 배율 행은 기준 설계와 일치한다.
    let base_case = &cases[1];
    assert_eq!(base_case.reflux_ratio, design.reflux_ratio);
    assert_eq!(base_case.tray_count, design.tray_count);
    assert_eq!(base_case.sizing.diameter_m, design.tray_column.diameter_m);
}
