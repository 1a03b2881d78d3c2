//! 요청 단위 오류와 치명적 오류의 분류 테스트.
use circularity_toolbox::app::{is_request_error, AppError};
use circularity_toolbox::chart::ChartError;
use circularity_toolbox::circularity::IndexError;
use circularity_toolbox::config::ConfigError;
use circularity_toolbox::db::DbError;

#[test]
fn calculation_errors_return_to_menu() {
    assert!(is_request_error(&AppError::Index(IndexError::EmptyInput)));
    assert!(is_request_error(&AppError::Index(
        IndexError::DegenerateDenominator { phase: 0 }
    )));
    assert!(is_request_error(&AppError::Chart(ChartError::NoData)));
}

#[test]
fn lookup_table_errors_return_to_menu() {
    // 잘못된 --data-dir 경로는 해당 요청만 실패시키고 메뉴로 돌아가야 한다.
    let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
    assert!(is_request_error(&AppError::Db(DbError::Io(missing))));
    assert!(is_request_error(&AppError::Db(DbError::BadYearKey(
        "abc".to_string()
    ))));
}

#[test]
fn io_and_config_errors_are_fatal() {
    let broken = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
    assert!(!is_request_error(&AppError::Io(broken)));

    let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    assert!(!is_request_error(&AppError::Config(ConfigError::Io(denied))));
}
