use distillation_design_toolbox::design::specification::{build_separation_spec, SpecError};

const FEED_COMPOSITION: [f64; 5] = [0.05, 0.10, 0.25, 0.30, 0.30];
const RECOVERIES: [f64; 5] = [0.999, 0.995, 0.60, 0.05, 0.001];

#[test]
fn material_balance_closes_per_component() {
    let spec = build_separation_spec(1000.0, &FEED_COMPOSITION, &RECOVERIES, 2, 3)
        .expect("spec build");
    for i in 0..5 {
        let feed = spec.feed_component_kmol_per_h[i];
        let split = spec.distillate_component_kmol_per_h[i] + spec.bottoms_component_kmol_per_h[i];
        assert!(
            (feed - split).abs() < 1e-9,
            "component {i}: F_i={feed} D_i+B_i={split}"
        );
    }
    assert!(
        (spec.distillate_kmol_per_h + spec.bottoms_kmol_per_h - spec.feed_kmol_per_h).abs() < 1e-9
    );
}

#[test]
fn product_compositions_sum_to_one() {
    let spec = build_separation_spec(1000.0, &FEED_COMPOSITION, &RECOVERIES, 2, 3)
        .expect("spec build");
    let xd_sum: f64 = spec.distillate_composition.iter().sum();
    let xb_sum: f64 = spec.bottoms_composition.iter().sum();
    assert!((xd_sum - 1.0).abs() < 1e-9, "xD sum={xd_sum}");
    assert!((xb_sum - 1.0).abs() < 1e-9, "xB sum={xb_sum}");
}

#[test]
fn worked_case_totals() {
    let spec = build_separation_spec(1000.0, &FEED_COMPOSITION, &RECOVERIES, 2, 3)
        .expect("spec build");
    assert!(
        (spec.distillate_kmol_per_h - 314.75).abs() < 1e-9,
        "D={}",
        spec.distillate_kmol_per_h
    );
    assert!(
        (spec.bottoms_kmol_per_h - 685.25).abs() < 1e-9,
        "B={}",
        spec.bottoms_kmol_per_h
    );
    assert_eq!(spec.light_key, 2);
    assert_eq!(spec.heavy_key, 3);
}

#[test]
fn composition_outside_tolerance_is_rejected() {
    let z = [0.05, 0.10, 0.25, 0.30, 0.3001];
    let err = build_separation_spec(1000.0, &z, &RECOVERIES, 2, 3).unwrap_err();
    assert!(matches!(err, SpecError::CompositionSum(_)), "{err:?}");
}

#[test]
fn wrong_component_count_is_rejected() {
    let z = [0.25, 0.25, 0.25, 0.25];
    let err = build_separation_spec(1000.0, &z, &RECOVERIES, 2, 3).unwrap_err();
    assert!(matches!(err, SpecError::ComponentCount(4)), "{err:?}");
}

#[test]
fn misordered_keys_are_rejected() {
    let err = build_separation_spec(1000.0, &FEED_COMPOSITION, &RECOVERIES, 3, 2).unwrap_err();
    assert!(matches!(err, SpecError::KeyOrder { .. }), "{err:?}");
}

#[test]
fn non_positive_feed_is_rejected() {
    let err = build_separation_spec(0.0, &FEED_COMPOSITION, &RECOVERIES, 2, 3).unwrap_err();
    assert!(matches!(err, SpecError::NonPositiveFeed(_)), "{err:?}");
}
