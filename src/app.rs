use crate::chart::ChartError;
use crate::circularity::IndexError;
use crate::config::Config;
use crate::db::DbError;
use crate::i18n::{keys, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 지수/단가 계산 오류
    Index(IndexError),
    /// 조회 테이블 로드 오류
    Db(DbError),
    /// 차트 렌더링/저장 오류
    Chart(ChartError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Index(e) => write!(f, "계산 오류: {e}"),
            AppError::Db(e) => write!(f, "데이터베이스 오류: {e}"),
            AppError::Chart(e) => write!(f, "차트 오류: {e}"),
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

impl From<IndexError> for AppError {
    fn from(value: IndexError) -> Self {
        AppError::Index(value)
    }
}

impl From<DbError> for AppError {
    fn from(value: DbError) -> Self {
        AppError::Db(value)
    }
}

impl From<ChartError> for AppError {
    fn from(value: ChartError) -> Self {
        AppError::Chart(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 계산/조회 테이블 오류는 요청 하나에 국한되므로 루프를 끝내지 않고
/// 표시만 하고 메뉴로 돌아간다. 입출력/설정 오류는 호출자에게 전파한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Indices => report_local(tr, ui_cli::handle_indices(tr, config))?,
            MenuChoice::Costs => report_local(tr, ui_cli::handle_costs(tr, config))?,
            MenuChoice::BrowseCpi => report_local(tr, ui_cli::handle_browse_cpi(tr, config))?,
            MenuChoice::BrowsePrices => report_local(tr, ui_cli::handle_browse_prices(tr, config))?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 한 요청에 국한되어 메뉴로 복귀해도 되는 오류인지 판별한다.
/// 계산/차트/조회 테이블 오류가 해당하고, 입출력·설정 오류는 치명적이다.
pub fn is_request_error(err: &AppError) -> bool {
    matches!(
        err,
        AppError::Index(_) | AppError::Chart(_) | AppError::Db(_)
    )
}

/// 요청 단위 오류는 비치명적으로 표시만 하고 나머지는 전파한다.
fn report_local(tr: &Translator, result: Result<(), AppError>) -> Result<(), AppError> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if is_request_error(&err) => {
            println!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            Ok(())
        }
        Err(other) => Err(other),
    }
}
