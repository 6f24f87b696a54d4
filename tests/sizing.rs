use distillation_design_toolbox::components::builtin_components;
use distillation_design_toolbox::design::packed_sizing::{size_packed_column, PackedColumnInput};
use distillation_design_toolbox::design::specification::build_separation_spec;
use distillation_design_toolbox::design::tray_sizing::{size_tray_section, TraySectionInput};
use distillation_design_toolbox::internals_db::{self, TrayData};

const FEED_COMPOSITION: [f64; 5] = [0.05, 0.10, 0.25, 0.30, 0.30];
const RECOVERIES: [f64; 5] = [0.999, 0.995, 0.60, 0.05, 0.001];
const UNIFORM: [f64; 5] = [0.2, 0.2, 0.2, 0.2, 0.2];

fn section_input<'a>(
    vapor_kmol_per_h: f64,
    comps: &'a [distillation_design_toolbox::components::Component],
    tray: &'a TrayData,
) -> TraySectionInput<'a> {
    TraySectionInput {
        liquid_kmol_per_h: 800.0,
        vapor_kmol_per_h,
        vapor_composition: &UNIFORM,
        components: comps,
        pressure_atm: 2.0,
        temperature_k: 370.0,
        liquid_density_kg_per_m3: 650.0,
        tray,
        flood_fraction: 0.75,
        active_area_fraction: 0.80,
    }
}

#[test]
fn tray_diameter_scales_with_sqrt_of_vapor_flow() {
    let comps = builtin_components().expect("builtin components");
    let tray = internals_db::find_tray("valve").expect("valve tray");
    let base = size_tray_section(section_input(1000.0, &comps, tray)).expect("base section");
    let doubled = size_tray_section(section_input(2000.0, &comps, tray)).expect("doubled section");
    // 속도가 같으면 면적은 유량에 비례하므로 직경은 sqrt(2)배
    let ratio = doubled.diameter_m / base.diameter_m;
    assert!((ratio - 2f64.sqrt()).abs() < 1e-9, "ratio={ratio}");
}

#[test]
fn tray_diameter_scales_inversely_with_sqrt_of_velocity() {
    let comps = builtin_components().expect("builtin components");
    let slow = internals_db::find_tray("valve").expect("valve tray");
    // 용량 계수 4배 → 운전 속도 4배 → 면적 1/4 → 직경 1/2
    let fast = TrayData {
        code: "valve",
        name: "Valve tray",
        capacity_factor_m_per_s: 4.0 * slow.capacity_factor_m_per_s,
        spacing_m: slow.spacing_m,
    };
    let base = size_tray_section(section_input(1000.0, &comps, slow)).expect("base section");
    let quick = size_tray_section(section_input(1000.0, &comps, &fast)).expect("fast section");
    let ratio = quick.diameter_m / base.diameter_m;
    assert!((ratio - 0.5).abs() < 1e-9, "ratio={ratio}");
}

#[test]
fn packed_diameter_scales_with_sqrt_of_distillate_flow() {
    let comps = builtin_components().expect("builtin components");
    let packing = internals_db::find_packing("intalox_saddles_1in").expect("intalox packing");
    let spec1 = build_separation_spec(1000.0, &FEED_COMPOSITION, &RECOVERIES, 2, 3).expect("spec");
    let spec2 = build_separation_spec(2000.0, &FEED_COMPOSITION, &RECOVERIES, 2, 3).expect("spec");

    let sizing1 = size_packed_column(PackedColumnInput {
        spec: &spec1,
        components: &comps,
        reflux_ratio: 4.0,
        theoretical_stages: 20.0,
        pressure_atm: 2.0,
        packing,
        params: Default::default(),
    })
    .expect("packed sizing");
    let sizing2 = size_packed_column(PackedColumnInput {
        spec: &spec2,
        components: &comps,
        reflux_ratio: 4.0,
        theoretical_stages: 20.0,
        pressure_atm: 2.0,
        packing,
        params: Default::default(),
    })
    .expect("packed sizing");

    // 조성이 같으면 F_LV와 속도는 불변이고 면적만 유량에 비례한다.
    assert!((sizing1.flow_parameter - sizing2.flow_parameter).abs() < 1e-12);
    assert!(
        (sizing1.operating_velocity_m_per_s - sizing2.operating_velocity_m_per_s).abs() < 1e-12
    );
    let ratio = sizing2.diameter_m / sizing1.diameter_m;
    assert!((ratio - 2f64.sqrt()).abs() < 1e-9, "ratio={ratio}");
}

#[test]
fn packed_height_follows_hetp() {
    let comps = builtin_components().expect("builtin components");
    let packing = internals_db::find_packing("intalox_saddles_1in").expect("intalox packing");
    let spec = build_separation_spec(1000.0, &FEED_COMPOSITION, &RECOVERIES, 2, 3).expect("spec");
    let sizing = size_packed_column(PackedColumnInput {
        spec: &spec,
        components: &comps,
        reflux_ratio: 4.0,
        theoretical_stages: 20.0,
        pressure_atm: 2.0,
        packing,
        params: Default::default(),
    })
    .expect("packed sizing");
    assert!((sizing.packed_height_m - 20.0 * packing.hetp_m).abs() < 1e-12);
    assert!((sizing.total_height_m - sizing.packed_height_m - 2.0).abs() < 1e-12);
    assert!(sizing.diameter_m.is_finite() && sizing.diameter_m > 0.0);
}
