use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 공급 흐름 조건을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConditions {
    /// 공급 유량 [kmol/h]
    pub flow_kmol_per_h: f64,
    /// 공급 조성 (가장 휘발성이 큰 성분부터) [mol/mol]
    pub composition: Vec<f64>,
    /// 공급 기화율 [-]
    pub vapor_fraction: f64,
    /// 운전 압력 [atm, 절대압]
    pub pressure_atm: f64,
}

impl Default for FeedConditions {
    fn default() -> Self {
        Self {
            flow_kmol_per_h: 1000.0,
            composition: vec![0.05, 0.10, 0.25, 0.30, 0.30],
            vapor_fraction: 0.2,
            pressure_atm: 2.0,
        }
    }
}

/// 분리 목표: 성분별 탑정 회수율과 키 성분 지정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparationPolicy {
    /// 성분별 탑정 회수율 (가장 휘발성이 큰 성분부터) [-]
    pub distillate_recoveries: Vec<f64>,
    /// 경질 키 성분 인덱스 (0부터)
    pub light_key: usize,
    /// 중질 키 성분 인덱스 (0부터)
    pub heavy_key: usize,
}

impl Default for SeparationPolicy {
    fn default() -> Self {
        Self {
            distillate_recoveries: vec![0.999, 0.995, 0.60, 0.05, 0.001],
            light_key: 2,
            heavy_key: 3,
        }
    }
}

/// 운전 정책: 환류 배율과 민감도 분석 배율 목록.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingPolicy {
    /// 운전 환류비 = 배율 × RR_min
    pub reflux_multiplier: f64,
    /// 민감도 분석에 쓸 배율 목록
    pub sweep_multipliers: Vec<f64>,
}

impl Default for OperatingPolicy {
    fn default() -> Self {
        Self {
            reflux_multiplier: 1.30,
            sweep_multipliers: vec![1.10, 1.30, 1.50, 2.00],
        }
    }
}

/// 애플리케이션 설정을 표현한다. 기본값이 기준 설계 케이스를 재현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (ko/en). 비우면 시스템 로케일을 따른다.
    pub language: Option<String>,
    /// 트레이 종류 코드 (internals 테이블 참조)
    pub tray_type: String,
    /// 충전물 종류 코드 (internals 테이블 참조)
    pub packing_type: String,
    pub feed: FeedConditions,
    pub separation: SeparationPolicy,
    pub operation: OperatingPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            tray_type: "valve".to_string(),
            packing_type: "intalox_saddles_1in".to_string(),
            feed: FeedConditions::default(),
            separation: SeparationPolicy::default(),
            operation: OperatingPolicy::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

const CONFIG_PATH: &str = "config.toml";

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        load_from(path)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

/// 지정한 경로의 설정 파일을 로드한다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&content)?;
    Ok(cfg)
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(CONFIG_PATH, content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
