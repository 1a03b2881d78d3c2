//! 자재 단가 비교 연산 테스트.
use circularity_toolbox::circularity::{material_costs, IndexError};

#[test]
fn adjusts_prices_to_base_year_purchasing_power() {
    // prices=[100,200], cpis=[50,100] -> adjusted=[100*(50/50), 200*(50/100)]
    let cmp = material_costs(&[100.0, 200.0], &[50.0, 100.0]).expect("costs");
    assert_eq!(cmp.non_adjusted, vec![100.0, 200.0]);
    assert_eq!(cmp.inflation_adjusted, vec![100.0, 100.0]);
}

#[test]
fn first_phase_is_always_unchanged() {
    let cmp = material_costs(&[720.0, 580.0, 350.0], &[320.0, 258.8, 172.2]).expect("costs");
    assert_eq!(cmp.inflation_adjusted[0], 720.0);
    // 과거 단가는 기준 연도 구매력으로 환산되면서 커진다 (cpi[0] > cpi[i]).
    assert!(cmp.inflation_adjusted[1] > cmp.non_adjusted[1]);
    assert!(cmp.inflation_adjusted[2] > cmp.non_adjusted[2]);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(material_costs(&[], &[]).unwrap_err(), IndexError::EmptyInput);
}

#[test]
fn length_mismatch_is_rejected() {
    let err = material_costs(&[100.0, 200.0], &[50.0]).unwrap_err();
    assert_eq!(
        err,
        IndexError::LengthMismatch {
            series: "cpis",
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn non_positive_cpi_is_rejected() {
    let err = material_costs(&[100.0, 200.0], &[50.0, -1.0]).unwrap_err();
    assert_eq!(err, IndexError::NonPositiveCpi { phase: 1 });
}
