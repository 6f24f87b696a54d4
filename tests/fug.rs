use distillation_design_toolbox::design::fug::{
    feed_stage_location, fenske_min_stages, gilliland_stages, solve_underwood_theta,
    underwood_balance, underwood_min_reflux, FugError,
};
use distillation_design_toolbox::design::specification::{build_separation_spec, SeparationSpec};

const ALPHA: [f64; 5] = [3.0, 2.3, 1.8, 1.3, 1.0];
const FEED_COMPOSITION: [f64; 5] = [0.05, 0.10, 0.25, 0.30, 0.30];
const RECOVERIES: [f64; 5] = [0.999, 0.995, 0.60, 0.05, 0.001];
const LIQUID_FRACTION: f64 = 0.8;

fn worked_spec() -> SeparationSpec {
    build_separation_spec(1000.0, &FEED_COMPOSITION, &RECOVERIES, 2, 3).expect("spec build")
}

#[test]
fn underwood_theta_lies_between_key_volatilities_and_satisfies_balance() {
    let theta = solve_underwood_theta(&ALPHA, &FEED_COMPOSITION, LIQUID_FRACTION, 2, 3)
        .expect("underwood theta");
    assert!(theta > ALPHA[3] && theta < ALPHA[2], "theta={theta}");
    let residual = underwood_balance(theta, &ALPHA, &FEED_COMPOSITION, LIQUID_FRACTION);
    assert!(residual.abs() <= 1e-10, "residual={residual:e}");
}

#[test]
fn underwood_detects_missing_sign_change() {
    // 키 성분이 공급에 없는 모순된 조성: 구간 안에 근이 없다.
    let z = [0.5, 0.5, 0.0, 0.0, 0.0];
    let err = solve_underwood_theta(&ALPHA, &z, LIQUID_FRACTION, 2, 3).unwrap_err();
    assert!(matches!(err, FugError::NoRootInBracket { .. }), "{err:?}");
}

#[test]
fn min_reflux_is_positive_for_worked_case() {
    let spec = worked_spec();
    let solution = underwood_min_reflux(
        &ALPHA,
        &spec.feed_composition,
        &spec.distillate_composition,
        LIQUID_FRACTION,
        spec.light_key,
        spec.heavy_key,
    )
    .expect("underwood");
    assert!(solution.theta > 1.3 && solution.theta < 1.8, "theta={}", solution.theta);
    assert!(
        solution.min_reflux_ratio > 3.4 && solution.min_reflux_ratio < 3.8,
        "RR_min={}",
        solution.min_reflux_ratio
    );
}

#[test]
fn fenske_matches_hand_calculation() {
    let spec = worked_spec();
    let min_stages = fenske_min_stages(
        &spec.distillate_composition,
        &spec.bottoms_composition,
        spec.light_key,
        spec.heavy_key,
        &ALPHA,
    )
    .expect("fenske");
    // (xD_LK/xD_HK)(xB_HK/xB_LK) = 10 * 2.85 = 28.5, α_LK/α_HK = 18/13
    let expected = 28.5f64.ln() / (1.8f64 / 1.3).ln();
    assert!((min_stages - expected).abs() < 1e-9, "N_min={min_stages}");
}

#[test]
fn fenske_requires_positive_key_compositions() {
    let spec = worked_spec();
    let mut bottoms = spec.bottoms_composition.clone();
    bottoms[spec.light_key] = 0.0;
    let err = fenske_min_stages(
        &spec.distillate_composition,
        &bottoms,
        spec.light_key,
        spec.heavy_key,
        &ALPHA,
    )
    .unwrap_err();
    assert!(
        matches!(err, FugError::NonPositiveKeyComposition { .. }),
        "{err:?}"
    );
}

#[test]
fn gilliland_stage_count_decreases_toward_min_stages_as_reflux_grows() {
    let min_stages = 10.294;
    let min_reflux = 3.585;
    let n_low = gilliland_stages(min_stages, 1.05 * min_reflux, min_reflux);
    let n_mid = gilliland_stages(min_stages, 1.30 * min_reflux, min_reflux);
    let n_high = gilliland_stages(min_stages, 2.00 * min_reflux, min_reflux);
    assert!(n_low > n_mid, "N(1.05)={n_low} N(1.30)={n_mid}");
    assert!(n_mid > n_high, "N(1.30)={n_mid} N(2.00)={n_high}");
    assert!(n_high > min_stages, "N(2.00)={n_high}");

    // 전환류 극한에서는 최소단수로 수렴한다.
    let n_total = gilliland_stages(min_stages, 1000.0 * min_reflux, min_reflux);
    assert!((n_total - min_stages).abs() < 0.01, "N(∞)={n_total}");
}

#[test]
fn feed_stage_sections_split_the_fenske_minimum() {
    let spec = worked_spec();
    let min_stages = fenske_min_stages(
        &spec.distillate_composition,
        &spec.bottoms_composition,
        spec.light_key,
        spec.heavy_key,
        &ALPHA,
    )
    .expect("fenske");
    let location = feed_stage_location(
        &spec.distillate_composition,
        &spec.bottoms_composition,
        &spec.feed_composition,
        spec.light_key,
        spec.heavy_key,
        &ALPHA,
        min_stages,
        2.0 * min_stages,
        4.0 * min_stages,
    )
    .expect("feed stage");
    // 구간별 Fenske는 전체 최소단수를 정확히 나눠 갖는다.
    let split = location.rectifying_min_stages + location.stripping_min_stages;
    assert!((split - min_stages).abs() < 1e-9, "split={split}");
    assert!(location.theoretical_stage > 1.0);
    assert!(location.actual_tray >= 1);
}
