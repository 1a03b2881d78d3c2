use clap::Parser;

use circularity_toolbox::{app, config, i18n};

/// 건설 자재 재사용 순환성 지수(FDCI/DCI) 계산기.
#[derive(Parser)]
#[command(name = "circularity_toolbox")]
#[command(about = "FDCI/DCI circularity index calculator for construction material reuse")]
struct Cli {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,

    /// CPI/자재 단가 JSON 테이블 디렉터리 (기본: data/ 또는 내장 복사본)
    #[arg(long)]
    data_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        let lang = i18n::resolve_language(&cli.lang, None);
        let tr = i18n::Translator::new(&lang);
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = Some(dir.clone());
    }
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new(&lang);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
