use crate::components::{Component, ComponentError};
use crate::config::Config;
use crate::design::column::DesignError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 성분 테이블 오류
    Component(ComponentError),
    /// 설계 계산 오류
    Design(DesignError),
    /// 설정이 가리키는 트레이 코드가 테이블에 없음
    UnknownTray(String),
    /// 설정이 가리키는 충전물 코드가 테이블에 없음
    UnknownPacking(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Component(e) => write!(f, "성분 테이블 오류: {e}"),
            AppError::Design(e) => write!(f, "설계 계산 오류: {e}"),
            AppError::UnknownTray(code) => write!(f, "알 수 없는 트레이 코드: {code}"),
            AppError::UnknownPacking(code) => write!(f, "알 수 없는 충전물 코드: {code}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<ComponentError> for AppError {
    fn from(value: ComponentError) -> Self {
        AppError::Component(value)
    }
}

impl From<DesignError> for AppError {
    fn from(value: DesignError) -> Self {
        AppError::Design(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator, comps: &[Component]) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::DesignReport => ui_cli::handle_design_report(tr, config, comps)?,
            MenuChoice::RefluxSweep => ui_cli::handle_sweep(tr, config, comps)?,
            MenuChoice::Components => ui_cli::handle_components(tr, comps),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
