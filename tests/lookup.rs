//! CPI/단가 조회 테이블 테스트. 내장/`data/` 테이블과 기본값 대체 정책을 확인한다.
use circularity_toolbox::db::{
    cpi::DEFAULT_CPI, prices::DEFAULT_PRICE, CpiTable, DbError, MaterialKind, PriceTable,
};

#[test]
fn bundled_cpi_table_covers_1900_to_2025() {
    let table = CpiTable::load(None).expect("load cpi table");
    assert_eq!(table.year_range(), Some((1900, 2025)));

    let lv = table.lookup(2000);
    assert!(!lv.defaulted);
    assert!((lv.value - 172.2).abs() < 1e-9);

    let lv = table.lookup(1950);
    assert!(!lv.defaulted);
    assert!((lv.value - 24.1).abs() < 1e-9);
}

#[test]
fn missing_cpi_year_falls_back_to_documented_default() {
    let table = CpiTable::load(None).expect("load cpi table");
    let lv = table.lookup(1800);
    assert!(lv.defaulted);
    assert_eq!(lv.value, DEFAULT_CPI);
    assert_eq!(lv.year, 1800);
}

#[test]
fn bundled_price_tables_load_for_every_material() {
    for kind in MaterialKind::ALL {
        let table = PriceTable::load(kind, None).expect("load price table");
        assert_eq!(table.kind(), kind);
        assert!(table.year_range().is_some());
    }
}

#[test]
fn sparse_price_table_defaults_between_entries() {
    let table = PriceTable::load(MaterialKind::Steel, None).expect("load steel prices");
    // 단가 테이블은 5년 간격이므로 1999년은 기본값으로 대체된다.
    let lv = table.lookup(1999);
    assert!(lv.defaulted);
    assert_eq!(lv.value, DEFAULT_PRICE);

    let lv = table.lookup(2000);
    assert!(!lv.defaulted);
    assert!((lv.value - 350.0).abs() < 1e-9);
}

#[test]
fn tables_parse_from_json_strings() {
    let table = CpiTable::from_json(r#"{"2020": 258.8, "2021": 271.0}"#).expect("parse");
    assert_eq!(table.len(), 2);
    assert_eq!(table.year_range(), Some((2020, 2021)));
    assert!(!table.lookup(2020).defaulted);

    let prices =
        PriceTable::from_json(MaterialKind::Wood, r#"{"2020": 430.0}"#).expect("parse");
    assert!((prices.lookup(2020).value - 430.0).abs() < 1e-9);
}

#[test]
fn non_integer_year_key_is_rejected() {
    let err = CpiTable::from_json(r#"{"abc": 1.0}"#).unwrap_err();
    assert!(matches!(err, DbError::BadYearKey(key) if key == "abc"));
}

#[test]
fn material_kind_parses_loosely() {
    assert_eq!(MaterialKind::parse("Steel"), Some(MaterialKind::Steel));
    assert_eq!(MaterialKind::parse(" wood "), Some(MaterialKind::Wood));
    assert_eq!(MaterialKind::parse("CONCRETE"), Some(MaterialKind::Concrete));
    assert_eq!(MaterialKind::parse("glass"), None);
}
