//! JSON 기반 읽기 전용 조회 테이블(연도별 CPI, 자재별 단가).
//!
//! 테이블은 프로세스 시작 시 한 번 로드되어 불변으로 사용된다. 조회 실패는
//! 요청 전체를 실패시키지 않고 문서화된 기본값으로 대체하며, 호출자가 경고를
//! 표시할 수 있도록 `defaulted` 플래그를 돌려준다.

pub mod cpi;
pub mod prices;

pub use cpi::CpiTable;
pub use prices::{MaterialKind, PriceTable};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// 연도 조회 결과.
#[derive(Debug, Clone, Copy)]
pub struct LookupValue {
    pub year: i32,
    pub value: f64,
    /// true면 테이블에 해당 연도가 없어 기본값으로 대체되었음을 의미한다.
    pub defaulted: bool,
}

/// 테이블 로드 시 발생 가능한 오류.
#[derive(Debug)]
pub enum DbError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 파싱 오류
    Json(serde_json::Error),
    /// 연도 키가 정수가 아님
    BadYearKey(String),
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            DbError::Json(e) => write!(f, "JSON 파싱 오류: {e}"),
            DbError::BadYearKey(key) => write!(f, "연도 키가 올바르지 않습니다: {key}"),
        }
    }
}

impl std::error::Error for DbError {}

impl From<std::io::Error> for DbError {
    fn from(value: std::io::Error) -> Self {
        DbError::Io(value)
    }
}

impl From<serde_json::Error> for DbError {
    fn from(value: serde_json::Error) -> Self {
        DbError::Json(value)
    }
}

/// `{"1950": 24.1, ...}` 형태의 플랫 맵을 연도순 정렬 맵으로 파싱한다.
fn parse_year_map(src: &str) -> Result<BTreeMap<i32, f64>, DbError> {
    let raw: BTreeMap<String, f64> = serde_json::from_str(src)?;
    let mut map = BTreeMap::new();
    for (key, value) in raw {
        let year: i32 = key
            .trim()
            .parse()
            .map_err(|_| DbError::BadYearKey(key.clone()))?;
        map.insert(year, value);
    }
    Ok(map)
}

/// 데이터 디렉터리가 지정되면 그 안의 파일을, 아니면 기본 `data/` 경로를
/// 시도하고, 둘 다 없으면 빌드에 내장된 복사본을 사용한다.
fn load_year_map(
    data_dir: Option<&Path>,
    file_name: &str,
    embedded: &str,
) -> Result<BTreeMap<i32, f64>, DbError> {
    if let Some(dir) = data_dir {
        let content = fs::read_to_string(dir.join(file_name))?;
        return parse_year_map(&content);
    }
    let default_path = Path::new("data").join(file_name);
    if default_path.exists() {
        let content = fs::read_to_string(default_path)?;
        return parse_year_map(&content);
    }
    parse_year_map(embedded)
}
