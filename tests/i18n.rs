//! 언어 번들 키 누락 회귀 테스트.
use circularity_toolbox::i18n::{keys, Translator};

const MISSING: &str = "[missing translation]";

#[test]
fn table_column_keys_resolve_in_both_languages() {
    let column_keys = [
        keys::COL_PHASE,
        keys::COL_YEAR,
        keys::COL_CPI,
        keys::COL_PRICE,
        keys::COL_REQUIREMENT,
        keys::COL_REUSE,
        keys::COL_FDCI_NO,
        keys::COL_FDCI_WITH,
        keys::COL_DCI,
        keys::COL_NOMINAL,
        keys::COL_ADJUSTED,
    ];
    for lang in ["ko", "en"] {
        let tr = Translator::new(lang);
        for key in column_keys {
            assert_ne!(tr.t(key), MISSING, "{lang}: {key}");
        }
    }
}

#[test]
fn menu_and_prompt_keys_resolve_in_both_languages() {
    let core_keys = [
        keys::ERROR_PREFIX,
        keys::APP_EXIT,
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_INDICES,
        keys::MAIN_MENU_COSTS,
        keys::MAIN_MENU_BROWSE_CPI,
        keys::MAIN_MENU_BROWSE_PRICES,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
        keys::PROMPT_NUM_PHASES,
        keys::PROMPT_REUSE_FACTOR,
        keys::WARN_CPI_DEFAULTED,
        keys::WARN_PRICE_DEFAULTED,
        keys::HELP_INDICES,
        keys::HELP_COSTS,
    ];
    for lang in ["ko", "en"] {
        let tr = Translator::new(lang);
        for key in core_keys {
            assert_ne!(tr.t(key), MISSING, "{lang}: {key}");
        }
    }
}

#[test]
fn unknown_language_falls_back_to_korean() {
    let fallback = Translator::new("fr");
    let korean = Translator::new("ko");
    assert_eq!(fallback.t(keys::APP_EXIT), korean.t(keys::APP_EXIT));
}
