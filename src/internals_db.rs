/// 탑 내부장치(트레이/충전물)의 상관식 상수 테이블을 제공한다.
/// 값은 참고용 문헌치이며 벤더 데이터로 확정해야 한다.

#[derive(Debug, Clone, Copy)]
pub struct TrayData {
    pub code: &'static str,
    pub name: &'static str,
    /// 단순 범람 상관식의 용량 계수 C [m/s]
    pub capacity_factor_m_per_s: f64,
    /// 트레이 간격 [m]
    pub spacing_m: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct PackingData {
    pub code: &'static str,
    pub name: &'static str,
    /// 공칭 크기 [in]
    pub nominal_size_in: f64,
    /// Leva 상관식의 충전 계수 Fp [-]
    pub packing_factor: f64,
    /// 경험적 HETP [m]
    pub hetp_m: f64,
}

pub fn trays() -> &'static [TrayData] {
    TRAYS
}

pub fn packings() -> &'static [PackingData] {
    PACKINGS
}

pub fn find_tray(code: &str) -> Option<&'static TrayData> {
    TRAYS
        .iter()
        .find(|t| t.code.eq_ignore_ascii_case(code) || t.name.eq_ignore_ascii_case(code))
}

pub fn find_packing(code: &str) -> Option<&'static PackingData> {
    PACKINGS
        .iter()
        .find(|p| p.code.eq_ignore_ascii_case(code) || p.name.eq_ignore_ascii_case(code))
}

const TRAYS: &[TrayData] = &[
    TrayData {
        code: "valve",
        name: "Valve tray",
        capacity_factor_m_per_s: 0.15,
        spacing_m: 0.5,
    },
    TrayData {
        code: "sieve",
        name: "Sieve tray",
        capacity_factor_m_per_s: 0.12,
        spacing_m: 0.5,
    },
];

const PACKINGS: &[PackingData] = &[
    PackingData {
        code: "intalox_saddles_1in",
        name: "Intalox Saddles 1\"",
        nominal_size_in: 1.0,
        packing_factor: 92.0,
        hetp_m: 0.4572,
    },
    PackingData {
        code: "raschig_rings_1in",
        name: "Raschig Rings 1\"",
        nominal_size_in: 1.0,
        packing_factor: 155.0,
        hetp_m: 0.4572,
    },
    PackingData {
        code: "pall_rings_1in",
        name: "Pall Rings 1\"",
        nominal_size_in: 1.0,
        packing_factor: 56.0,
        hetp_m: 0.4572,
    },
];

// NOTE:
// - 용량 계수/충전 계수는 통상적인 설계 교재 값이며 장치 선정 시 벤더 시트로 검증할 것.
// - HETP는 저점도 탄화수소용 랜덤 충전물 경험값이다.
