use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 bar(절대압)이다.
/// 증류탑 설계에서는 모든 압력을 절대압으로 다루므로 게이지 보정은 하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Bar,
    Pascal,
    KiloPascal,
    Psi,
    Atm,
}

const ATM_BAR: f64 = 1.01325;
const PA_PER_BAR: f64 = 100_000.0;

/// 주어진 압력을 bar(절대압)로 변환한다.
pub fn to_bar(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value,
        PressureUnit::Pascal => value / PA_PER_BAR,
        PressureUnit::KiloPascal => value / 100.0,
        PressureUnit::Psi => value * 0.0689476,
        PressureUnit::Atm => value * ATM_BAR,
    }
}

/// bar(절대압) 값을 원하는 단위로 변환한다.
pub fn from_bar(value_bar: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Bar => value_bar,
        PressureUnit::Pascal => value_bar * PA_PER_BAR,
        PressureUnit::KiloPascal => value_bar * 100.0,
        PressureUnit::Psi => value_bar / 0.0689476,
        PressureUnit::Atm => value_bar / ATM_BAR,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let bar = to_bar(value, from);
    from_bar(bar, to)
}
