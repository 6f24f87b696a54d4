use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_REPORT: &str = "main_menu.report";
    pub const MAIN_MENU_SWEEP: &str = "main_menu.sweep";
    pub const MAIN_MENU_COMPONENTS: &str = "main_menu.components";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const REPORT_TITLE: &str = "report.title";
    pub const FEED_HEADING: &str = "report.feed_heading";
    pub const BALANCE_HEADING: &str = "report.balance_heading";
    pub const BALANCE_HEADER: &str = "report.balance_header";
    pub const RESULT_DISTILLATE: &str = "result.distillate";
    pub const RESULT_BOTTOMS: &str = "result.bottoms";
    pub const KEYS_LINE: &str = "report.keys_line";

    pub const FUG_HEADING: &str = "report.fug_heading";
    pub const RESULT_MIN_STAGES: &str = "result.min_stages";
    pub const RESULT_THETA: &str = "result.theta";
    pub const RESULT_MIN_REFLUX: &str = "result.min_reflux";
    pub const RESULT_REFLUX: &str = "result.reflux";
    pub const RESULT_THEORETICAL_STAGES: &str = "result.theoretical_stages";

    pub const EFFICIENCY_HEADING: &str = "report.efficiency_heading";
    pub const RESULT_FEED_VISCOSITY: &str = "result.feed_viscosity";
    pub const RESULT_EFFICIENCY: &str = "result.efficiency";
    pub const RESULT_REAL_STAGES: &str = "result.real_stages";
    pub const RESULT_TRAY_COUNT: &str = "result.tray_count";
    pub const RESULT_FEED_STAGE: &str = "result.feed_stage";

    pub const TRAY_HEADING: &str = "report.tray_heading";
    pub const SECTION_TOP: &str = "report.section_top";
    pub const SECTION_BOTTOM: &str = "report.section_bottom";
    pub const RESULT_INTERNAL_FLOWS: &str = "result.internal_flows";
    pub const RESULT_TEMPERATURE: &str = "result.temperature";
    pub const RESULT_VAPOR_MM: &str = "result.vapor_mm";
    pub const RESULT_DENSITIES: &str = "result.densities";
    pub const RESULT_VELOCITIES: &str = "result.velocities";
    pub const RESULT_AREAS: &str = "result.areas";
    pub const RESULT_DIAMETER: &str = "result.diameter";
    pub const RESULT_COLUMN_DIAMETER: &str = "result.column_diameter";
    pub const RESULT_COLUMN_HEIGHT: &str = "result.column_height";

    pub const PACKED_HEADING: &str = "report.packed_heading";
    pub const PACKING_LINE: &str = "report.packing_line";
    pub const RESULT_FLOW_PARAMETER: &str = "result.flow_parameter";
    pub const RESULT_PACKED_HEIGHT: &str = "result.packed_height";

    pub const SWEEP_HEADING: &str = "report.sweep_heading";
    pub const SWEEP_HEADER: &str = "report.sweep_header";

    pub const COMPONENTS_HEADING: &str = "report.components_heading";
    pub const COMPONENTS_HEADER: &str = "report.components_header";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_MULTIPLIER: &str = "settings.current_multiplier";
    pub const SETTINGS_PROMPT_MULTIPLIER: &str = "settings.prompt_multiplier";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Distillation Design Toolbox ===",
        MAIN_MENU_REPORT => "1) 전체 설계 보고서",
        MAIN_MENU_SWEEP => "2) 환류비 민감도 분석",
        MAIN_MENU_COMPONENTS => "3) 성분 물성 테이블",
        MAIN_MENU_SETTINGS => "4) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        REPORT_TITLE => "\n=== 다성분 증류탑 개념 설계 보고서 ===",
        FEED_HEADING => "\n-- 공급 조건 --",
        BALANCE_HEADING => "\n-- 물질수지 (회수율 기준) --",
        BALANCE_HEADER => "성분            zF      F_i       D_i       B_i       xD      xB",
        RESULT_DISTILLATE => "탑정 유량 D:",
        RESULT_BOTTOMS => "탑저 유량 B:",
        KEYS_LINE => "경질 키 / 중질 키:",
        FUG_HEADING => "\n-- FUG (Fenske–Underwood–Gilliland) --",
        RESULT_MIN_STAGES => "최소 이론단수 N_min:",
        RESULT_THETA => "Underwood 근 θ:",
        RESULT_MIN_REFLUX => "최소 환류비 RR_min:",
        RESULT_REFLUX => "운전 환류비 RR:",
        RESULT_THEORETICAL_STAGES => "이론단수 N:",
        EFFICIENCY_HEADING => "\n-- 트레이 효율 (O'Connell) --",
        RESULT_FEED_VISCOSITY => "공급 혼합 점도:",
        RESULT_EFFICIENCY => "전체 효율 η_G:",
        RESULT_REAL_STAGES => "실제단수:",
        RESULT_TRAY_COUNT => "설계 트레이 수:",
        RESULT_FEED_STAGE => "공급단 위치 (이론/실제):",
        TRAY_HEADING => "\n-- 밸브 트레이 탑 사이징 --",
        SECTION_TOP => "[탑정 구간]",
        SECTION_BOTTOM => "[탑저 구간]",
        RESULT_INTERNAL_FLOWS => "내부 유량 L/V:",
        RESULT_TEMPERATURE => "온도 가정:",
        RESULT_VAPOR_MM => "기상 평균 몰질량:",
        RESULT_DENSITIES => "기상/액상 밀도:",
        RESULT_VELOCITIES => "범람/운전 속도:",
        RESULT_AREAS => "유효/전체 면적:",
        RESULT_DIAMETER => "구간 직경:",
        RESULT_COLUMN_DIAMETER => "채택 탑 직경:",
        RESULT_COLUMN_HEIGHT => "유효/전체 높이:",
        PACKED_HEADING => "\n-- 충전탑 사이징 (Leva) --",
        PACKING_LINE => "충전물:",
        RESULT_FLOW_PARAMETER => "흐름 파라미터 F_LV / Y:",
        RESULT_PACKED_HEIGHT => "충전 높이 (HETP 기준):",
        SWEEP_HEADING => "\n-- 환류비 민감도 분석 --",
        SWEEP_HEADER => "배율     RR       N_teo    N_real   트레이   D [m]    H [m]",
        COMPONENTS_HEADING => "\n-- 성분 물성 테이블 (휘발도 순) --",
        COMPONENTS_HEADER => "순위 코드 성분           Tb[K]    MM       α_ref   ρL       μ[cP]",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_MULTIPLIER => "현재 환류 배율:",
        SETTINGS_PROMPT_MULTIPLIER => "새 환류 배율 (≥1, 취소하려면 엔터): ",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (ko/en, 취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Distillation Design Toolbox ===",
        MAIN_MENU_REPORT => "1) Full design report",
        MAIN_MENU_SWEEP => "2) Reflux sensitivity sweep",
        MAIN_MENU_COMPONENTS => "3) Component property table",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        REPORT_TITLE => "\n=== Multicomponent Distillation Column Conceptual Design ===",
        FEED_HEADING => "\n-- Feed conditions --",
        BALANCE_HEADING => "\n-- Material balance (by recoveries) --",
        BALANCE_HEADER => "Component       zF      F_i       D_i       B_i       xD      xB",
        RESULT_DISTILLATE => "Distillate D:",
        RESULT_BOTTOMS => "Bottoms B:",
        KEYS_LINE => "Light key / heavy key:",
        FUG_HEADING => "\n-- FUG (Fenske–Underwood–Gilliland) --",
        RESULT_MIN_STAGES => "Minimum stages N_min:",
        RESULT_THETA => "Underwood root θ:",
        RESULT_MIN_REFLUX => "Minimum reflux RR_min:",
        RESULT_REFLUX => "Operating reflux RR:",
        RESULT_THEORETICAL_STAGES => "Theoretical stages N:",
        EFFICIENCY_HEADING => "\n-- Tray efficiency (O'Connell) --",
        RESULT_FEED_VISCOSITY => "Feed mixture viscosity:",
        RESULT_EFFICIENCY => "Overall efficiency η_G:",
        RESULT_REAL_STAGES => "Real stages:",
        RESULT_TRAY_COUNT => "Design tray count:",
        RESULT_FEED_STAGE => "Feed stage (theoretical/actual):",
        TRAY_HEADING => "\n-- Valve tray column sizing --",
        SECTION_TOP => "[Top section]",
        SECTION_BOTTOM => "[Bottom section]",
        RESULT_INTERNAL_FLOWS => "Internal flows L/V:",
        RESULT_TEMPERATURE => "Assumed temperature:",
        RESULT_VAPOR_MM => "Vapor mean molar mass:",
        RESULT_DENSITIES => "Vapor/liquid density:",
        RESULT_VELOCITIES => "Flooding/operating velocity:",
        RESULT_AREAS => "Active/total area:",
        RESULT_DIAMETER => "Section diameter:",
        RESULT_COLUMN_DIAMETER => "Adopted column diameter:",
        RESULT_COLUMN_HEIGHT => "Active/total height:",
        PACKED_HEADING => "\n-- Packed column sizing (Leva) --",
        PACKING_LINE => "Packing:",
        RESULT_FLOW_PARAMETER => "Flow parameter F_LV / Y:",
        RESULT_PACKED_HEIGHT => "Packed height (from HETP):",
        SWEEP_HEADING => "\n-- Reflux sensitivity sweep --",
        SWEEP_HEADER => "Mult.    RR       N_theo   N_real   Trays    D [m]    H [m]",
        COMPONENTS_HEADING => "\n-- Component property table (by volatility) --",
        COMPONENTS_HEADER => "Rank Code Component      Tb[K]    MM       α_ref   ρL       μ[cP]",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_MULTIPLIER => "Current reflux multiplier:",
        SETTINGS_PROMPT_MULTIPLIER => "New reflux multiplier (≥1, enter to cancel): ",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "Language code (ko/en, enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}
