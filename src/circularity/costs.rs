//! 인플레이션 보정/명목 자재 단가 비교 계산.

use super::indices::IndexError;

/// 자재 단가 비교 결과.
#[derive(Debug, Clone, Default)]
pub struct CostComparison {
    /// 기준 연도(첫 단계) 구매력으로 환산한 단가: `price[i] * (cpi[0] / cpi[i])`
    pub inflation_adjusted: Vec<f64>,
    /// 명목 단가 그대로
    pub non_adjusted: Vec<f64>,
}

/// 단계별 명목 단가와 CPI로 보정/무보정 단가 쌍을 계산한다.
///
/// 주의: 지수 점화식과 달리 여기서는 `cpi[0]/cpi[i]` 비율을 쓴다. 과거 단가를
/// 기준 연도 구매력으로 깎아 내리는 방향이며, 두 연산의 비율 방향 차이는
/// 의도된 규약이다.
pub fn material_costs(prices: &[f64], cpis: &[f64]) -> Result<CostComparison, IndexError> {
    if prices.is_empty() {
        return Err(IndexError::EmptyInput);
    }
    if cpis.len() != prices.len() {
        return Err(IndexError::LengthMismatch {
            series: "cpis",
            expected: prices.len(),
            actual: cpis.len(),
        });
    }
    for (i, cpi) in cpis.iter().enumerate() {
        if *cpi <= 0.0 {
            return Err(IndexError::NonPositiveCpi { phase: i });
        }
    }

    let base_cpi = cpis[0];
    let mut out = CostComparison {
        inflation_adjusted: Vec::with_capacity(prices.len()),
        non_adjusted: Vec::with_capacity(prices.len()),
    };
    for (price, cpi) in prices.iter().zip(cpis) {
        out.inflation_adjusted.push(price * (base_cpi / cpi));
        out.non_adjusted.push(*price);
    }
    Ok(out)
}
