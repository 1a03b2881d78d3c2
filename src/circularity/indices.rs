//! 단계별 자재 재사용 시나리오에 대한 FDCI/DCI 점화식 계산.
//!
//! 규약: 재사용률은 0~100 퍼센트, 인플레이션 보정은 `cpi[i]/cpi[0]` 비율,
//! DCI는 무보정 FDCI와 동일한 식을 사용한다.

/// 단계(Phase) 하나의 입력값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseInput {
    /// 연도 라벨(표시/조회 키)
    pub year: i32,
    /// 자재 명목 단가 [USD/단위]
    pub price: f64,
    /// 직전 단계에서 이월된 자재 중 재사용되는 비율 [%]
    pub reuse_factor_pct: f64,
    /// 해당 단계에 필요한 자재 총량 [ton]
    pub material_required: f64,
    /// 해당 단계 연도의 소비자물가지수. `cpi[0]`이 인플레이션 기준이 된다.
    pub cpi: f64,
}

/// 계산 결과. 세 수열 모두 입력 단계 수와 같은 길이를 가진다.
#[derive(Debug, Clone, Default)]
pub struct IndexSeries {
    /// 무보정 FDCI
    pub fdci_no_inflation: Vec<f64>,
    /// 인플레이션 보정 FDCI
    pub fdci_with_inflation: Vec<f64>,
    /// DCI (정준 규약에서 무보정 FDCI와 동일한 식)
    pub dci: Vec<f64>,
}

/// 지수 계산 시 발생 가능한 오류.
#[derive(Debug, PartialEq, Eq)]
pub enum IndexError {
    /// 단계가 하나도 없음
    EmptyInput,
    /// 병렬 입력 수열 길이 불일치
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
    /// 필요 자재량이 0 이하
    NonPositiveRequirement { phase: usize },
    /// CPI가 0 이하
    NonPositiveCpi { phase: usize },
    /// 분모가 0이 되는 퇴화 입력
    DegenerateDenominator { phase: usize },
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::EmptyInput => write!(f, "단계 입력이 비어 있습니다"),
            IndexError::LengthMismatch {
                series,
                expected,
                actual,
            } => write!(
                f,
                "입력 수열 길이 불일치: {series} (기대 {expected}, 실제 {actual})"
            ),
            IndexError::NonPositiveRequirement { phase } => {
                write!(f, "단계 {}의 필요 자재량이 0 이하입니다", phase + 1)
            }
            IndexError::NonPositiveCpi { phase } => {
                write!(f, "단계 {}의 CPI가 0 이하입니다", phase + 1)
            }
            IndexError::DegenerateDenominator { phase } => {
                write!(f, "단계 {}에서 분모가 0이 되었습니다", phase + 1)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// 다섯 개의 병렬 수열로부터 단계 입력 목록을 만든다. 길이가 다르면 거부한다.
pub fn phases_from_series(
    years: &[i32],
    prices: &[f64],
    reuse_factors_pct: &[f64],
    material_requirements: &[f64],
    cpis: &[f64],
) -> Result<Vec<PhaseInput>, IndexError> {
    let n = years.len();
    let check = |series: &'static str, len: usize| {
        if len == n {
            Ok(())
        } else {
            Err(IndexError::LengthMismatch {
                series,
                expected: n,
                actual: len,
            })
        }
    };
    check("prices", prices.len())?;
    check("reuse_factors", reuse_factors_pct.len())?;
    check("material_requirements", material_requirements.len())?;
    check("cpis", cpis.len())?;

    Ok((0..n)
        .map(|i| PhaseInput {
            year: years[i],
            price: prices[i],
            reuse_factor_pct: reuse_factors_pct[i],
            material_required: material_requirements[i],
            cpi: cpis[i],
        })
        .collect())
}

fn validate(phases: &[PhaseInput]) -> Result<(), IndexError> {
    if phases.is_empty() {
        return Err(IndexError::EmptyInput);
    }
    for (i, p) in phases.iter().enumerate() {
        if p.material_required <= 0.0 {
            return Err(IndexError::NonPositiveRequirement { phase: i });
        }
        if p.cpi <= 0.0 {
            return Err(IndexError::NonPositiveCpi { phase: i });
        }
    }
    Ok(())
}

/// 단계별 점화식을 순서대로 수행해 세 지수 수열을 계산한다.
///
/// 첫 단계의 이월 자재량은 `material_required[0]`으로 시드한다(프로젝트 최초
/// 보유량). 이후 각 단계의 재사용량이 다음 단계로 이월된다. 결과값에 대한
/// 클램핑은 하지 않으므로 재사용량이 필요량을 넘는 비정상 입력에서는 지수가
/// [0, 1] 범위를 벗어날 수 있다.
pub fn compute_indices(phases: &[PhaseInput]) -> Result<IndexSeries, IndexError> {
    validate(phases)?;

    let base_cpi = phases[0].cpi;
    let mut out = IndexSeries {
        fdci_no_inflation: Vec::with_capacity(phases.len()),
        fdci_with_inflation: Vec::with_capacity(phases.len()),
        dci: Vec::with_capacity(phases.len()),
    };

    let mut material_from_previous = phases[0].material_required;
    for (i, p) in phases.iter().enumerate() {
        let reused = material_from_previous * p.reuse_factor_pct / 100.0;
        let procured = p.material_required - reused;

        let nominal_denom = reused + procured * p.price;
        if nominal_denom == 0.0 {
            return Err(IndexError::DegenerateDenominator { phase: i });
        }
        let fdci_no_inflation = reused / nominal_denom;

        let adjusted_price = p.price * (p.cpi / base_cpi);
        let adjusted_denom = reused + procured * adjusted_price;
        if adjusted_denom == 0.0 {
            return Err(IndexError::DegenerateDenominator { phase: i });
        }
        let fdci_with_inflation = reused / adjusted_denom;

        out.fdci_no_inflation.push(fdci_no_inflation);
        out.fdci_with_inflation.push(fdci_with_inflation);
        out.dci.push(fdci_no_inflation);

        material_from_previous = reused;
    }

    Ok(out)
}
