use distillation_design_toolbox::components::{
    average_molar_mass, builtin_components, catalog_code_for_rank, fallback_molar_mass,
    molar_mass, Component, ComponentError,
};

#[test]
fn builtin_table_is_sorted_most_volatile_first() {
    let comps = builtin_components().expect("builtin components");
    assert_eq!(comps.len(), 5);
    for pair in comps.windows(2) {
        let a = pair[0].relative_volatility.expect("alpha present");
        let b = pair[1].relative_volatility.expect("alpha present");
        assert!(a > b, "{} ({a}) vs {} ({b})", pair[0].name, pair[1].name);
    }
    assert_eq!(comps[0].name, "n-pentane");
    assert_eq!(comps[4].name, "n-decane");
}

#[test]
fn blank_property_cell_reads_as_unknown() {
    let comps = builtin_components().expect("builtin components");
    let decane = comps.iter().find(|c| c.name == "n-decane").expect("n-decane");
    // 테이블에서 빈 문자열로 둔 셀은 0이 아니라 미상으로 읽힌다.
    assert!(decane.surface_tension_mn_per_m.is_none());
    assert!(decane.viscosity_cp.is_some());
    // 기상 밀도는 어떤 행에도 없다.
    assert!(comps.iter().all(|c| c.vapor_density_kg_per_m3.is_none()));
}

#[test]
fn rank_catalog_map_matches_builtin_rows() {
    let comps = builtin_components().expect("builtin components");
    for c in &comps {
        assert_eq!(
            catalog_code_for_rank(c.rank),
            Some(c.catalog_code),
            "rank {} -> code {}",
            c.rank,
            c.catalog_code
        );
    }
    assert_eq!(catalog_code_for_rank(99), None);
}

fn bare_component(catalog_code: u32) -> Component {
    Component {
        rank: 1,
        catalog_code,
        name: "test".to_string(),
        boiling_point_k: None,
        molar_mass_kg_per_kmol: None,
        relative_volatility: None,
        liquid_density_kg_per_m3: None,
        vapor_density_kg_per_m3: None,
        viscosity_cp: None,
        surface_tension_mn_per_m: None,
    }
}

#[test]
fn molar_mass_falls_back_by_catalog_code() {
    assert_eq!(fallback_molar_mass(7), Some(100.21));
    let comp = bare_component(7);
    assert!((molar_mass(&comp).expect("fallback") - 100.21).abs() < 1e-12);

    let unknown = bare_component(42);
    let err = molar_mass(&unknown).unwrap_err();
    assert!(matches!(err, ComponentError::MissingMolarMass(_)), "{err:?}");
}

#[test]
fn average_molar_mass_weights_composition() {
    let comps = builtin_components().expect("builtin components");
    let uniform = [0.2; 5];
    let mean = average_molar_mass(&uniform, &comps).expect("average molar mass");
    let expected = (72.15 + 86.18 + 100.21 + 128.26 + 142.29) / 5.0;
    assert!((mean - expected).abs() < 1e-9, "mean={mean}");
}
