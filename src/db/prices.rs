//! 자재 종류별 연도-단가 테이블.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{load_year_map, parse_year_map, DbError, LookupValue};

/// 테이블에 없는 연도를 조회했을 때 대체되는 기본 단가 [USD/단위].
pub const DEFAULT_PRICE: f64 = 500.0;

/// 계산 대상 건설 자재 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Steel,
    Wood,
    Concrete,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 3] =
        [MaterialKind::Steel, MaterialKind::Wood, MaterialKind::Concrete];

    /// 사용자 입력을 느슨하게 파싱한다(대소문자 무시).
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Steel => "steel",
            MaterialKind::Wood => "wood",
            MaterialKind::Concrete => "concrete",
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            MaterialKind::Steel => "steel_prices.json",
            MaterialKind::Wood => "wood_prices.json",
            MaterialKind::Concrete => "concrete_prices.json",
        }
    }

    fn embedded(&self) -> &'static str {
        match self {
            MaterialKind::Steel => include_str!("../../data/steel_prices.json"),
            MaterialKind::Wood => include_str!("../../data/wood_prices.json"),
            MaterialKind::Concrete => include_str!("../../data/concrete_prices.json"),
        }
    }
}

/// 자재 하나에 대한 연도 → 단가 읽기 전용 맵.
#[derive(Debug, Clone)]
pub struct PriceTable {
    kind: MaterialKind,
    map: BTreeMap<i32, f64>,
}

impl PriceTable {
    /// 자재 종류에 해당하는 테이블을 로드한다.
    pub fn load(kind: MaterialKind, data_dir: Option<&Path>) -> Result<Self, DbError> {
        Ok(Self {
            kind,
            map: load_year_map(data_dir, kind.file_name(), kind.embedded())?,
        })
    }

    /// JSON 문자열에서 직접 만든다.
    pub fn from_json(kind: MaterialKind, src: &str) -> Result<Self, DbError> {
        Ok(Self {
            kind,
            map: parse_year_map(src)?,
        })
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    /// 연도의 단가를 조회한다. 없으면 기본값으로 대체하고 플래그를 세운다.
    pub fn lookup(&self, year: i32) -> LookupValue {
        match self.map.get(&year) {
            Some(value) => LookupValue {
                year,
                value: *value,
                defaulted: false,
            },
            None => LookupValue {
                year,
                value: DEFAULT_PRICE,
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
}
