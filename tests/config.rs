//! 설정 직렬화/역직렬화 회귀 테스트.
use circularity_toolbox::config::{Config, ConfigError};
use circularity_toolbox::db::MaterialKind;

#[test]
fn toml_round_trip_preserves_non_default_config() {
    let cfg = Config {
        language: "en".to_string(),
        default_material: MaterialKind::Wood,
        data_dir: Some("tables".to_string()),
        chart_dir: "charts".to_string(),
    };
    let text = toml::to_string_pretty(&cfg).expect("serialize config");
    let parsed: Config = toml::from_str(&text).expect("parse config");
    assert_eq!(parsed, cfg);
}

#[test]
fn default_config_matches_documented_values() {
    let cfg = Config::default();
    assert_eq!(cfg.language, "auto");
    assert_eq!(cfg.default_material, MaterialKind::Steel);
    assert_eq!(cfg.data_dir, None);
    assert_eq!(cfg.chart_dir, ".");
}

#[test]
fn material_kind_serializes_lowercase() {
    let cfg = Config {
        default_material: MaterialKind::Concrete,
        ..Config::default()
    };
    let text = toml::to_string_pretty(&cfg).expect("serialize config");
    assert!(text.contains("default_material = \"concrete\""));
}

#[test]
fn malformed_toml_maps_to_serde_error() {
    let parse_err = toml::from_str::<Config>("language = 5").unwrap_err();
    let err = ConfigError::from(parse_err);
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn io_failure_maps_to_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    assert!(matches!(ConfigError::from(io), ConfigError::Io(_)));
}
