//! FDCI/DCI 점화식 회귀 테스트.
use circularity_toolbox::circularity::{
    compute_indices, phases_from_series, IndexError, PhaseInput,
};

fn phase(year: i32, price: f64, reuse: f64, required: f64, cpi: f64) -> PhaseInput {
    PhaseInput {
        year,
        price,
        reuse_factor_pct: reuse,
        material_required: required,
        cpi,
    }
}

#[test]
fn single_phase_zero_reuse_gives_zero_indices() {
    let series = compute_indices(&[phase(2022, 500.0, 0.0, 1000.0, 100.0)]).expect("compute");
    assert_eq!(series.fdci_no_inflation, vec![0.0]);
    assert_eq!(series.fdci_with_inflation, vec![0.0]);
    assert_eq!(series.dci, vec![0.0]);
}

#[test]
fn full_reuse_gives_unit_indices() {
    // 재사용률 100%면 조달량이 0이므로 세 지수 모두 1이어야 한다.
    let series = compute_indices(&[phase(2022, 500.0, 100.0, 1000.0, 100.0)]).expect("compute");
    assert_eq!(series.fdci_no_inflation, vec![1.0]);
    assert_eq!(series.fdci_with_inflation, vec![1.0]);
    assert_eq!(series.dci, vec![1.0]);
}

#[test]
fn two_phase_worked_example() {
    // prices=[500,500], reuse=[75,75], req=[1000,1000], cpis=[100,100]
    let phases = [
        phase(2022, 500.0, 75.0, 1000.0, 100.0),
        phase(2023, 500.0, 75.0, 1000.0, 100.0),
    ];
    let series = compute_indices(&phases).expect("compute");

    // phase 0: reused=750, procured=250 -> 750 / (750 + 250*500)
    let expected0 = 750.0 / 125_750.0;
    // phase 1: carry=750, reused=562.5, procured=437.5 -> 562.5 / (562.5 + 437.5*500)
    let expected1 = 562.5 / 219_312.5;

    assert!((series.fdci_no_inflation[0] - expected0).abs() < 1e-12);
    assert!((series.fdci_no_inflation[1] - expected1).abs() < 1e-12);
    assert!((expected0 - 0.00596).abs() < 5e-6);
    assert!((expected1 - 0.00257).abs() < 5e-6);
}

#[test]
fn dci_matches_uninflated_fdci() {
    let phases = [
        phase(2000, 350.0, 60.0, 800.0, 172.2),
        phase(2010, 600.0, 40.0, 900.0, 218.1),
        phase(2020, 580.0, 80.0, 700.0, 258.8),
    ];
    let series = compute_indices(&phases).expect("compute");
    assert_eq!(series.dci, series.fdci_no_inflation);
}

#[test]
fn equal_cpis_make_inflation_adjustment_a_noop() {
    let phases = [
        phase(2020, 430.0, 75.0, 1000.0, 240.0),
        phase(2021, 600.0, 50.0, 1200.0, 240.0),
        phase(2022, 520.0, 30.0, 900.0, 240.0),
    ];
    let series = compute_indices(&phases).expect("compute");
    assert_eq!(series.fdci_with_inflation, series.fdci_no_inflation);
}

#[test]
fn inflation_ratio_is_rebased_to_first_phase_cpi() {
    // CPI가 기준 연도의 2배면 보정 단가도 2배가 되어 보정 FDCI가 작아진다.
    let phases = [
        phase(2000, 100.0, 50.0, 1000.0, 100.0),
        phase(2020, 100.0, 50.0, 1000.0, 200.0),
    ];
    let series = compute_indices(&phases).expect("compute");
    assert!(series.fdci_with_inflation[1] < series.fdci_no_inflation[1]);

    // 수치 확인: reused=250, procured=750, adjusted=200
    let expected = 250.0 / (250.0 + 750.0 * 200.0);
    assert!((series.fdci_with_inflation[1] - expected).abs() < 1e-12);
}

#[test]
fn carry_over_is_seeded_from_first_requirement() {
    // 시드가 0이나 재사용률 스케일 값이었다면 첫 단계 재사용량이 750이 될 수 없다.
    let phases = [phase(2022, 1.0, 75.0, 1000.0, 100.0)];
    let series = compute_indices(&phases).expect("compute");
    let expected = 750.0 / (750.0 + 250.0 * 1.0);
    assert!((series.fdci_no_inflation[0] - expected).abs() < 1e-12);
}

#[test]
fn compute_is_deterministic() {
    let phases = [
        phase(1990, 380.0, 35.0, 1500.0, 130.7),
        phase(2005, 520.0, 65.0, 1100.0, 195.3),
        phase(2022, 850.0, 75.0, 1000.0, 292.7),
    ];
    let first = compute_indices(&phases).expect("compute");
    let second = compute_indices(&phases).expect("compute");
    assert_eq!(first.fdci_no_inflation, second.fdci_no_inflation);
    assert_eq!(first.fdci_with_inflation, second.fdci_with_inflation);
    assert_eq!(first.dci, second.dci);
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(compute_indices(&[]).unwrap_err(), IndexError::EmptyInput);
}

#[test]
fn non_positive_requirement_is_rejected() {
    let err = compute_indices(&[phase(2022, 500.0, 50.0, 0.0, 100.0)]).unwrap_err();
    assert_eq!(err, IndexError::NonPositiveRequirement { phase: 0 });
}

#[test]
fn non_positive_cpi_is_rejected() {
    let err = compute_indices(&[
        phase(2022, 500.0, 50.0, 1000.0, 100.0),
        phase(2023, 500.0, 50.0, 1000.0, 0.0),
    ])
    .unwrap_err();
    assert_eq!(err, IndexError::NonPositiveCpi { phase: 1 });
}

#[test]
fn zero_denominator_is_a_degeneracy_error() {
    // 재사용 0 + 단가 0이면 분모가 0이 된다. NaN 대신 오류로 끝나야 한다.
    let err = compute_indices(&[phase(2022, 0.0, 0.0, 1000.0, 100.0)]).unwrap_err();
    assert_eq!(err, IndexError::DegenerateDenominator { phase: 0 });
}

#[test]
fn series_length_mismatch_is_rejected() {
    let err = phases_from_series(
        &[2022, 2023],
        &[500.0, 500.0],
        &[75.0],
        &[1000.0, 1000.0],
        &[100.0, 100.0],
    )
    .unwrap_err();
    assert_eq!(
        err,
        IndexError::LengthMismatch {
            series: "reuse_factors",
            expected: 2,
            actual: 1,
        }
    );
}

#[test]
fn phases_from_series_preserves_order() {
    let phases = phases_from_series(
        &[2022, 2023],
        &[500.0, 510.0],
        &[75.0, 60.0],
        &[1000.0, 900.0],
        &[292.7, 304.7],
    )
    .expect("build phases");
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[1].year, 2023);
    assert_eq!(phases[1].price, 510.0);
    assert_eq!(phases[1].reuse_factor_pct, 60.0);
    assert_eq!(phases[1].material_required, 900.0);
    assert_eq!(phases[1].cpi, 304.7);
}
