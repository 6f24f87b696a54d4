use std::path::PathBuf;

use clap::Parser;
use distillation_design_toolbox::{app, components, config, i18n, ui_cli};

/// 다성분 증류탑 개념 설계 도구 (FUG 단경로법 + 트레이/충전탑 사이징)
#[derive(Parser, Debug)]
#[command(name = "distillation_design_toolbox", version)]
struct Cli {
    /// 언어 코드 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로 (기본: config.toml, 없으면 기본값 생성)
    #[arg(long)]
    config: Option<PathBuf>,
    /// 성분 테이블 경로 (기본: 내장 테이블)
    #[arg(long)]
    components: Option<PathBuf>,
    /// 설계 보고서를 출력하고 종료한다
    #[arg(long)]
    report: bool,
    /// 환류비 민감도 분석을 출력하고 종료한다
    #[arg(long)]
    sweep: bool,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new(&lang);
    let comps = match &cli.components {
        Some(path) => components::load_components(path)?,
        None => components::builtin_components()?,
    };

    // 일회성 실행 모드: 보고서/민감도 분석만 출력하고 끝낸다.
    if cli.report || cli.sweep {
        if cli.report {
            ui_cli::handle_design_report(&tr, &cfg, &comps)?;
        }
        if cli.sweep {
            ui_cli::handle_sweep(&tr, &cfg, &comps)?;
        }
        return Ok(());
    }

    app::run(&mut cfg, &tr, &comps)?;
    Ok(())
}
