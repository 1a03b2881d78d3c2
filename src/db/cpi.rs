//! 연도별 소비자물가지수(CPI) 테이블.

use std::collections::BTreeMap;
use std::path::Path;

use super::{load_year_map, parse_year_map, DbError, LookupValue};

/// 테이블에 없는 연도를 조회했을 때 대체되는 기본 CPI.
pub const DEFAULT_CPI: f64 = 100.0;

const FILE_NAME: &str = "cpi_database.json";
const EMBEDDED: &str = include_str!("../../data/cpi_database.json");

/// 연도 → CPI 읽기 전용 맵.
#[derive(Debug, Clone)]
pub struct CpiTable {
    map: BTreeMap<i32, f64>,
}

impl CpiTable {
    /// 테이블을 로드한다. 디렉터리 미지정 시 `data/cpi_database.json`,
    /// 그것도 없으면 내장 복사본을 사용한다.
    pub fn load(data_dir: Option<&Path>) -> Result<Self, DbError> {
        Ok(Self {
            map: load_year_map(data_dir, FILE_NAME, EMBEDDED)?,
        })
    }

    /// JSON 문자열에서 직접 만든다.
    pub fn from_json(src: &str) -> Result<Self, DbError> {
        Ok(Self {
            map: parse_year_map(src)?,
        })
    }

    /// 연도의 CPI를 조회한다. 없으면 기본값으로 대체하고 플래그를 세운다.
    pub fn lookup(&self, year: i32) -> LookupValue {
        match self.map.get(&year) {
            Some(value) => LookupValue {
                year,
                value: *value,
                defaulted: false,
            },
            None => LookupValue {
                year,
                value: DEFAULT_CPI,
                defaulted: true,
            },
        }
    }

    /// 테이블이 포함하는 (최소, 최대) 연도.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.map.keys().next()?;
        let max = self.map.keys().next_back()?;
        Some((*min, *max))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
