use std::io::{self, Write};

use crate::app::AppError;
use crate::components::Component;
use crate::config::Config;
use crate::design::column::{design_column, ColumnDesign, DesignInput};
use crate::design::sweep::{reflux_sensitivity, SweepCase};
use crate::i18n::{keys, Translator};
use crate::internals_db;
use crate::units::{
    convert_length, convert_temperature, convert_viscosity, LengthUnit, TemperatureUnit,
    ViscosityUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DesignReport,
    RefluxSweep,
    Components,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_REPORT));
    println!("{}", tr.t(keys::MAIN_MENU_SWEEP));
    println!("{}", tr.t(keys::MAIN_MENU_COMPONENTS));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::DesignReport),
            "2" => return Ok(MenuChoice::RefluxSweep),
            "3" => return Ok(MenuChoice::Components),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 설정으로부터 설계 입력을 구성한다. 내부장치 코드는 고정 테이블에서 찾는다.
pub fn build_design_input<'a>(
    cfg: &'a Config,
    comps: &'a [Component],
) -> Result<DesignInput<'a>, AppError> {
    let tray = internals_db::find_tray(&cfg.tray_type)
        .ok_or_else(|| AppError::UnknownTray(cfg.tray_type.clone()))?;
    let packing = internals_db::find_packing(&cfg.packing_type)
        .ok_or_else(|| AppError::UnknownPacking(cfg.packing_type.clone()))?;
    Ok(DesignInput {
        feed_kmol_per_h: cfg.feed.flow_kmol_per_h,
        feed_composition: &cfg.feed.composition,
        vapor_fraction: cfg.feed.vapor_fraction,
        pressure_atm: cfg.feed.pressure_atm,
        distillate_recoveries: &cfg.separation.distillate_recoveries,
        light_key: cfg.separation.light_key,
        heavy_key: cfg.separation.heavy_key,
        reflux_multiplier: cfg.operation.reflux_multiplier,
        components: comps,
        tray,
        packing,
        tray_params: Default::default(),
        packed_params: Default::default(),
    })
}

/// 전체 설계 보고서 메뉴를 처리한다.
pub fn handle_design_report(
    tr: &Translator,
    cfg: &Config,
    comps: &[Component],
) -> Result<(), AppError> {
    let input = build_design_input(cfg, comps)?;
    let design = design_column(&input)?;
    print_design_report(tr, cfg, &design, comps);
    Ok(())
}

/// 환류비 민감도 분석 메뉴를 처리한다.
pub fn handle_sweep(tr: &Translator, cfg: &Config, comps: &[Component]) -> Result<(), AppError> {
    let input = build_design_input(cfg, comps)?;
    let design = design_column(&input)?;
    let cases = reflux_sensitivity(&input, &design, &cfg.operation.sweep_multipliers)?;
    print_sweep(tr, &cases);
    Ok(())
}

/// 성분 물성 테이블 메뉴를 처리한다.
pub fn handle_components(tr: &Translator, comps: &[Component]) {
    println!("{}", tr.t(keys::COMPONENTS_HEADING));
    println!("{}", tr.t(keys::COMPONENTS_HEADER));
    for c in comps {
        println!(
            "{:<4} {:<4} {:<14} {:<8} {:<8} {:<7} {:<8} {:<7}",
            c.rank,
            c.catalog_code,
            c.name,
            fmt_opt(c.boiling_point_k, 1),
            fmt_opt(c.molar_mass_kg_per_kmol, 2),
            fmt_opt(c.relative_volatility, 2),
            fmt_opt(c.liquid_density_kg_per_m3, 1),
            fmt_opt(c.viscosity_cp, 3),
        );
    }
}

/// 설정 메뉴를 처리한다. 빈 입력은 해당 항목을 그대로 둔다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:.2}",
        tr.t(keys::SETTINGS_CURRENT_MULTIPLIER),
        cfg.operation.reflux_multiplier
    );
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_MULTIPLIER))?;
    let sel = sel.trim();
    if !sel.is_empty() {
        match sel.parse::<f64>() {
            Ok(v) if v >= 1.0 => cfg.operation.reflux_multiplier = v,
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language.as_deref().unwrap_or("auto")
    );
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = lang.trim().to_lowercase();
    match lang.as_str() {
        "" => {}
        "ko" | "en" => cfg.language = Some(lang),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 설계 보고서를 출력한다. 모든 수치는 코어 계산 결과를 그대로 반영한다.
pub fn print_design_report(tr: &Translator, cfg: &Config, design: &ColumnDesign, comps: &[Component]) {
    let spec = &design.spec;

    println!("{}", tr.t(keys::REPORT_TITLE));

    println!("{}", tr.t(keys::FEED_HEADING));
    println!(
        "F = {:.2} kmol/h, q_vap = {:.2}, P = {:.2} atm",
        spec.feed_kmol_per_h, cfg.feed.vapor_fraction, cfg.feed.pressure_atm
    );

    println!("{}", tr.t(keys::BALANCE_HEADING));
    println!("{}", tr.t(keys::BALANCE_HEADER));
    for (i, c) in comps.iter().enumerate() {
        println!(
            "{:<14} {:>7.4} {:>9.2} {:>9.2} {:>9.2} {:>7.4} {:>7.4}",
            c.name,
            spec.feed_composition[i],
            spec.feed_component_kmol_per_h[i],
            spec.distillate_component_kmol_per_h[i],
            spec.bottoms_component_kmol_per_h[i],
            spec.distillate_composition[i],
            spec.bottoms_composition[i],
        );
    }
    println!(
        "{} {:.2} kmol/h",
        tr.t(keys::RESULT_DISTILLATE),
        spec.distillate_kmol_per_h
    );
    println!(
        "{} {:.2} kmol/h",
        tr.t(keys::RESULT_BOTTOMS),
        spec.bottoms_kmol_per_h
    );
    println!(
        "{} {} / {}",
        tr.t(keys::KEYS_LINE),
        comps[spec.light_key].name,
        comps[spec.heavy_key].name
    );

    println!("{}", tr.t(keys::FUG_HEADING));
    println!("{} {:.2}", tr.t(keys::RESULT_MIN_STAGES), design.min_stages);
    println!("{} {:.4}", tr.t(keys::RESULT_THETA), design.theta);
    println!(
        "{} {:.4}",
        tr.t(keys::RESULT_MIN_REFLUX),
        design.min_reflux_ratio
    );
    println!("{} {:.4}", tr.t(keys::RESULT_REFLUX), design.reflux_ratio);
    println!(
        "{} {:.2}",
        tr.t(keys::RESULT_THEORETICAL_STAGES),
        design.theoretical_stages
    );

    println!("{}", tr.t(keys::EFFICIENCY_HEADING));
    println!(
        "{} {:.3} cP ({:.2e} Pa·s)",
        tr.t(keys::RESULT_FEED_VISCOSITY),
        design.feed_viscosity_cp,
        convert_viscosity(
            design.feed_viscosity_cp,
            ViscosityUnit::Centipoise,
            ViscosityUnit::PascalSecond
        )
    );
    println!(
        "{} {:.3}",
        tr.t(keys::RESULT_EFFICIENCY),
        design.tray_efficiency
    );
    println!("{} {:.2}", tr.t(keys::RESULT_REAL_STAGES), design.real_stages);
    println!("{} {}", tr.t(keys::RESULT_TRAY_COUNT), design.tray_count);
    println!(
        "{} {:.1} / {}",
        tr.t(keys::RESULT_FEED_STAGE),
        design.feed_stage.theoretical_stage,
        design.feed_stage.actual_tray
    );

    println!("{}", tr.t(keys::TRAY_HEADING));
    for (heading, section) in [
        (keys::SECTION_TOP, &design.tray_column.top),
        (keys::SECTION_BOTTOM, &design.tray_column.bottom),
    ] {
        println!("{}", tr.t(heading));
        println!(
            "{} {:.1} / {:.1} kmol/h",
            tr.t(keys::RESULT_INTERNAL_FLOWS),
            section.liquid_kmol_per_h,
            section.vapor_kmol_per_h
        );
        println!(
            "{} {:.0} K ({:.1} °C)",
            tr.t(keys::RESULT_TEMPERATURE),
            section.temperature_k,
            convert_temperature(
                section.temperature_k,
                TemperatureUnit::Kelvin,
                TemperatureUnit::Celsius
            )
        );
        println!(
            "{} {:.2} kg/kmol",
            tr.t(keys::RESULT_VAPOR_MM),
            section.vapor_molar_mass_kg_per_kmol
        );
        println!(
            "{} {:.3} / {:.1} kg/m3",
            tr.t(keys::RESULT_DENSITIES),
            section.vapor_density_kg_per_m3,
            section.liquid_density_kg_per_m3
        );
        println!(
            "{} {:.3} / {:.3} m/s",
            tr.t(keys::RESULT_VELOCITIES),
            section.flooding_velocity_m_per_s,
            section.operating_velocity_m_per_s
        );
        println!(
            "{} {:.2} / {:.2} m2",
            tr.t(keys::RESULT_AREAS),
            section.active_area_m2,
            section.total_area_m2
        );
        println!("{} {:.3} m", tr.t(keys::RESULT_DIAMETER), section.diameter_m);
    }
    println!(
        "{} {:.3} m",
        tr.t(keys::RESULT_COLUMN_DIAMETER),
        design.tray_column.diameter_m
    );
    println!(
        "{} {:.1} / {:.1} m",
        tr.t(keys::RESULT_COLUMN_HEIGHT),
        design.tray_column.active_height_m,
        design.tray_column.total_height_m
    );

    let packed = &design.packed_column;
    println!("{}", tr.t(keys::PACKED_HEADING));
    if let Some(packing) = internals_db::find_packing(&cfg.packing_type) {
        println!(
            "{} {} ({:.1} mm)",
            tr.t(keys::PACKING_LINE),
            packing.name,
            convert_length(
                packing.nominal_size_in,
                LengthUnit::Inch,
                LengthUnit::Millimeter
            )
        );
    }
    println!(
        "{} {:.2} kg/kmol",
        tr.t(keys::RESULT_VAPOR_MM),
        packed.top_molar_mass_kg_per_kmol
    );
    println!(
        "{} {:.3} / {:.1} kg/m3",
        tr.t(keys::RESULT_DENSITIES),
        packed.vapor_density_kg_per_m3,
        packed.liquid_density_kg_per_m3
    );
    println!(
        "{} {:.4} / {:.4}",
        tr.t(keys::RESULT_FLOW_PARAMETER),
        packed.flow_parameter,
        packed.leva_y
    );
    println!(
        "{} {:.3} / {:.3} m/s",
        tr.t(keys::RESULT_VELOCITIES),
        packed.flooding_velocity_m_per_s,
        packed.operating_velocity_m_per_s
    );
    println!(
        "{} {:.3} m (A = {:.2} m2)",
        tr.t(keys::RESULT_COLUMN_DIAMETER),
        packed.diameter_m,
        packed.area_m2
    );
    println!(
        "{} {:.2} m",
        tr.t(keys::RESULT_PACKED_HEIGHT),
        packed.packed_height_m
    );
    println!(
        "{} {:.2} m",
        tr.t(keys::RESULT_COLUMN_HEIGHT),
        packed.total_height_m
    );
}

/// 민감도 분석 표를 출력한다.
pub fn print_sweep(tr: &Translator, cases: &[SweepCase]) {
    println!("{}", tr.t(keys::SWEEP_HEADING));
    println!("{}", tr.t(keys::SWEEP_HEADER));
    for case in cases {
        println!(
            "{:<8.2} {:<8.3} {:<8.2} {:<8.2} {:<8} {:<8.3} {:<8.1}",
            case.multiplier,
            case.reflux_ratio,
            case.theoretical_stages,
            case.real_stages,
            case.tray_count,
            case.sizing.diameter_m,
            case.sizing.total_height_m,
        );
    }
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
