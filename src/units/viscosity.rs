use serde::{Deserialize, Serialize};

/// 점도 단위. 내부 기준은 cP이다.
/// 성분 테이블과 O'Connell 상관식이 cP 기준으로 동작한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViscosityUnit {
    Centipoise,
    PascalSecond,
}

fn to_cp(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value,
        ViscosityUnit::PascalSecond => value * 1000.0,
    }
}

fn from_cp(value: f64, unit: ViscosityUnit) -> f64 {
    match unit {
        ViscosityUnit::Centipoise => value,
        ViscosityUnit::PascalSecond => value / 1000.0,
    }
}

/// 점도를 변환한다.
pub fn convert_viscosity(value: f64, from: ViscosityUnit, to: ViscosityUnit) -> f64 {
    let base = to_cp(value, from);
    from_cp(base, to)
}
