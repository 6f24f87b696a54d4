//! 성분 레지스트리: 성분 테이블 파일을 읽어 휘발도 순으로 정렬된 물성 레코드를 제공한다.
//! 값이 비어 있거나 숫자가 아닌 셀은 0이 아니라 "미상"(None)으로 취급한다.

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// 성분 하나의 식별 정보와 물성. 로드 이후에는 불변이다.
#[derive(Debug, Clone)]
pub struct Component {
    /// 휘발도 순위(1 = 가장 휘발성이 큼). 레지스트리 안에서 유일하다.
    pub rank: u32,
    /// 외부 카탈로그 코드. 대체 물성 테이블의 키로 쓰인다.
    pub catalog_code: u32,
    pub name: String,
    /// 표준 끓는점 [K]
    pub boiling_point_k: Option<f64>,
    /// 몰질량 [kg/kmol]
    pub molar_mass_kg_per_kmol: Option<f64>,
    /// 최저 휘발성 성분(HK) 기준 상대휘발도 [-]
    pub relative_volatility: Option<f64>,
    /// 액상 밀도 [kg/m3]
    pub liquid_density_kg_per_m3: Option<f64>,
    /// 기상 밀도 [kg/m3]
    pub vapor_density_kg_per_m3: Option<f64>,
    /// 점도 [cP]
    pub viscosity_cp: Option<f64>,
    /// 표면장력 [mN/m]
    pub surface_tension_mn_per_m: Option<f64>,
}

/// 성분 테이블 처리 중 발생 가능한 오류.
#[derive(Debug)]
pub enum ComponentError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 테이블 파싱 오류
    Parse(toml::de::Error),
    /// 테이블에 성분 행이 하나도 없음
    Empty,
    /// 몰질량이 테이블에도 대체 테이블에도 없음
    MissingMolarMass(String),
    /// 상대휘발도가 테이블에 없음
    MissingVolatility(String),
}

impl std::fmt::Display for ComponentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ComponentError::Parse(e) => write!(f, "성분 테이블 파싱 오류: {e}"),
            ComponentError::Empty => write!(f, "성분 테이블이 비어 있습니다."),
            ComponentError::MissingMolarMass(name) => {
                write!(f, "성분 {name} 의 몰질량을 찾을 수 없습니다.")
            }
            ComponentError::MissingVolatility(name) => {
                write!(f, "성분 {name} 의 상대휘발도가 없습니다.")
            }
        }
    }
}

impl std::error::Error for ComponentError {}

impl From<std::io::Error> for ComponentError {
    fn from(value: std::io::Error) -> Self {
        ComponentError::Io(value)
    }
}

impl From<toml::de::Error> for ComponentError {
    fn from(value: toml::de::Error) -> Self {
        ComponentError::Parse(value)
    }
}

#[derive(Debug, Deserialize)]
struct ComponentRow {
    rank: u32,
    catalog_code: u32,
    name: String,
    #[serde(default, deserialize_with = "de_opt_f64")]
    boiling_point_k: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    molar_mass_kg_per_kmol: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    relative_volatility: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    liquid_density_kg_per_m3: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    vapor_density_kg_per_m3: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    viscosity_cp: Option<f64>,
    #[serde(default, deserialize_with = "de_opt_f64")]
    surface_tension_mn_per_m: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ComponentTable {
    #[serde(default)]
    component: Vec<ComponentRow>,
}

/// 숫자, 숫자 문자열, 공백, 누락을 모두 허용하는 물성 셀 역직렬화.
/// 해석할 수 없는 값은 오류가 아니라 "미상"으로 읽는다.
fn de_opt_f64<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<toml::Value>::deserialize(de)?;
    Ok(match value {
        Some(toml::Value::Float(v)) => Some(v),
        Some(toml::Value::Integer(v)) => Some(v as f64),
        Some(toml::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// 성분 테이블 파일을 읽어 가장 휘발성이 큰 성분부터 정렬된 목록을 반환한다.
pub fn load_components(path: &Path) -> Result<Vec<Component>, ComponentError> {
    let content = fs::read_to_string(path)?;
    parse_components(&content)
}

/// 실행 파일에 내장된 기본 성분 테이블(n-C5 ~ n-C10)을 반환한다.
pub fn builtin_components() -> Result<Vec<Component>, ComponentError> {
    parse_components(include_str!("../data/components.toml"))
}

fn parse_components(content: &str) -> Result<Vec<Component>, ComponentError> {
    let table: ComponentTable = toml::from_str(content)?;
    if table.component.is_empty() {
        return Err(ComponentError::Empty);
    }
    let mut comps: Vec<Component> = table
        .component
        .into_iter()
        .map(|row| Component {
            rank: row.rank,
            catalog_code: row.catalog_code,
            name: row.name,
            boiling_point_k: row.boiling_point_k,
            molar_mass_kg_per_kmol: row.molar_mass_kg_per_kmol,
            relative_volatility: row.relative_volatility,
            liquid_density_kg_per_m3: row.liquid_density_kg_per_m3,
            vapor_density_kg_per_m3: row.vapor_density_kg_per_m3,
            viscosity_cp: row.viscosity_cp,
            surface_tension_mn_per_m: row.surface_tension_mn_per_m,
        })
        .collect();
    // 상대휘발도 내림차순, 같으면 순위 오름차순
    comps.sort_by(|a, b| {
        b.relative_volatility
            .unwrap_or(0.0)
            .total_cmp(&a.relative_volatility.unwrap_or(0.0))
            .then(a.rank.cmp(&b.rank))
    });
    Ok(comps)
}

/// 휘발도 순위 → 외부 카탈로그 코드 고정 매핑.
const RANK_CATALOG_CODES: &[(u32, u32)] = &[(1, 5), (2, 6), (3, 7), (4, 9), (5, 10)];

pub fn catalog_code_for_rank(rank: u32) -> Option<u32> {
    RANK_CATALOG_CODES
        .iter()
        .find(|(r, _)| *r == rank)
        .map(|(_, code)| *code)
}

/// 카탈로그 코드별 문헌 몰질량 [kg/kmol]. 테이블 셀이 비어 있을 때만 사용한다.
const FALLBACK_MOLAR_MASS: &[(u32, f64)] = &[
    (5, 72.15),
    (6, 86.18),
    (7, 100.21),
    (9, 128.26),
    (10, 142.29),
];

pub fn fallback_molar_mass(catalog_code: u32) -> Option<f64> {
    FALLBACK_MOLAR_MASS
        .iter()
        .find(|(code, _)| *code == catalog_code)
        .map(|(_, mm)| *mm)
}

/// 성분의 몰질량을 반환한다. 테이블 값이 없으면 카탈로그 코드 기준 문헌값으로 대체한다.
pub fn molar_mass(comp: &Component) -> Result<f64, ComponentError> {
    comp.molar_mass_kg_per_kmol
        .or_else(|| fallback_molar_mass(comp.catalog_code))
        .ok_or_else(|| ComponentError::MissingMolarMass(comp.name.clone()))
}

/// 조성 x로 가중한 평균 몰질량 [kg/kmol]을 계산한다.
pub fn average_molar_mass(x: &[f64], comps: &[Component]) -> Result<f64, ComponentError> {
    let mut sum = 0.0;
    for (xi, comp) in x.iter().zip(comps) {
        sum += xi * molar_mass(comp)?;
    }
    Ok(sum)
}

/// 레지스트리 순서대로 상대휘발도 벡터를 추출한다. 누락은 치명 오류다.
pub fn relative_volatilities(comps: &[Component]) -> Result<Vec<f64>, ComponentError> {
    comps
        .iter()
        .map(|c| {
            c.relative_volatility
                .ok_or_else(|| ComponentError::MissingVolatility(c.name.clone()))
        })
        .collect()
}
