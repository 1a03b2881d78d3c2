use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_INDICES: &str = "main_menu.indices";
    pub const MAIN_MENU_COSTS: &str = "main_menu.costs";
    pub const MAIN_MENU_BROWSE_CPI: &str = "main_menu.browse_cpi";
    pub const MAIN_MENU_BROWSE_PRICES: &str = "main_menu.browse_prices";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_REQUIRE_POSITIVE: &str = "error.require_positive";
    pub const ERROR_REUSE_RANGE: &str = "error.reuse_range";
    pub const PROMPT_SELECT: &str = "prompt.select";

    pub const INDICES_HEADING: &str = "indices.heading";
    pub const PROMPT_MATERIAL: &str = "prompt.material";
    pub const PROMPT_NUM_PHASES: &str = "prompt.num_phases";
    pub const PROMPT_USE_CPI_DB: &str = "prompt.use_cpi_db";
    pub const PROMPT_USE_PRICE_DB: &str = "prompt.use_price_db";
    pub const PHASE_LABEL: &str = "indices.phase_label";
    pub const PROMPT_YEAR: &str = "prompt.year";
    pub const PROMPT_CPI_MANUAL: &str = "prompt.cpi_manual";
    pub const PROMPT_PRICE_MANUAL: &str = "prompt.price_manual";
    pub const PROMPT_REQUIREMENT: &str = "prompt.requirement";
    pub const PROMPT_REUSE_FACTOR: &str = "prompt.reuse_factor";
    pub const WARN_CPI_DEFAULTED: &str = "warn.cpi_defaulted";
    pub const WARN_PRICE_DEFAULTED: &str = "warn.price_defaulted";
    pub const RECAP_HEADING: &str = "indices.recap_heading";
    pub const RESULT_HEADING: &str = "indices.result_heading";
    pub const PROMPT_EXPORT_CHARTS: &str = "prompt.export_charts";
    pub const PROMPT_EXPORT_DIR: &str = "prompt.export_dir";
    pub const EXPORT_SAVED: &str = "export.saved";

    pub const COSTS_HEADING: &str = "costs.heading";
    pub const COSTS_RESULT_HEADING: &str = "costs.result_heading";

    pub const BROWSE_CPI_HEADING: &str = "browse.cpi_heading";
    pub const BROWSE_PRICES_HEADING: &str = "browse.prices_heading";
    pub const DB_YEAR_RANGE: &str = "browse.year_range";
    pub const DB_EMPTY: &str = "browse.empty";
    pub const PROMPT_YEAR_OR_BLANK: &str = "prompt.year_or_blank";
    pub const LOOKUP_DEFAULTED_NOTE: &str = "browse.defaulted_note";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_MATERIAL: &str = "settings.current_material";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_MATERIAL_OPTIONS: &str = "settings.material_options";
    pub const SETTINGS_LANG_OPTIONS: &str = "settings.lang_options";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_INDICES: &str = "help.indices";
    pub const HELP_COSTS: &str = "help.costs";

    pub const COL_PHASE: &str = "col.phase";
    pub const COL_YEAR: &str = "col.year";
    pub const COL_CPI: &str = "col.cpi";
    pub const COL_PRICE: &str = "col.price";
    pub const COL_REQUIREMENT: &str = "col.requirement";
    pub const COL_REUSE: &str = "col.reuse";
    pub const COL_FDCI_NO: &str = "col.fdci_no";
    pub const COL_FDCI_WITH: &str = "col.fdci_with";
    pub const COL_DCI: &str = "col.dci";
    pub const COL_NOMINAL: &str = "col.nominal";
    pub const COL_ADJUSTED: &str = "col.adjusted";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Circularity Toolbox (FDCI/DCI) ===",
        MAIN_MENU_INDICES => "1) FDCI/DCI 지수 계산",
        MAIN_MENU_COSTS => "2) 자재 단가 비교 (인플레이션 보정)",
        MAIN_MENU_BROWSE_CPI => "3) CPI 데이터베이스 조회",
        MAIN_MENU_BROWSE_PRICES => "4) 자재 단가 데이터베이스 조회",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_REQUIRE_POSITIVE => "0보다 큰 값을 입력하세요.",
        ERROR_REUSE_RANGE => "0~100 범위의 값을 입력하세요.",
        PROMPT_SELECT => "선택: ",
        INDICES_HEADING => "\n-- FDCI/DCI 지수 계산 --",
        PROMPT_MATERIAL => "자재 선택 (steel/wood/concrete, 엔터=기본값): ",
        PROMPT_NUM_PHASES => "단계 수 (1~25): ",
        PROMPT_USE_CPI_DB => "CPI 데이터베이스에서 연도별 값을 가져올까요? (y/n): ",
        PROMPT_USE_PRICE_DB => "자재 단가 데이터베이스에서 연도별 값을 가져올까요? (y/n): ",
        PHASE_LABEL => "단계",
        PROMPT_YEAR => "연도: ",
        PROMPT_CPI_MANUAL => "CPI 직접 입력: ",
        PROMPT_PRICE_MANUAL => "자재 단가 직접 입력 [USD/단위]: ",
        PROMPT_REQUIREMENT => "필요 자재량 [ton]: ",
        PROMPT_REUSE_FACTOR => "재사용률 [%] (0~100): ",
        WARN_CPI_DEFAULTED => "참고: 해당 연도의 CPI가 테이블에 없어 기본값 100을 사용합니다:",
        WARN_PRICE_DEFAULTED => "참고: 해당 연도의 단가가 테이블에 없어 기본값 500을 사용합니다:",
        RECAP_HEADING => "\n[입력 요약]",
        RESULT_HEADING => "\n[계산 결과]",
        PROMPT_EXPORT_CHARTS => "차트를 PNG로 저장할까요? (y/n): ",
        PROMPT_EXPORT_DIR => "저장 디렉터리(엔터=설정값 사용): ",
        EXPORT_SAVED => "차트 저장:",
        COSTS_HEADING => "\n-- 자재 단가 비교 --",
        COSTS_RESULT_HEADING => "\n[단가 비교 결과: 기준 연도 구매력 환산]",
        BROWSE_CPI_HEADING => "\n-- CPI 데이터베이스 --",
        BROWSE_PRICES_HEADING => "\n-- 자재 단가 데이터베이스 --",
        DB_YEAR_RANGE => "테이블 연도 범위:",
        DB_EMPTY => "테이블이 비어 있습니다.",
        PROMPT_YEAR_OR_BLANK => "연도 입력(종료하려면 엔터): ",
        LOOKUP_DEFAULTED_NOTE => "(기본값 대체)",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_MATERIAL => "기본 자재:",
        SETTINGS_OPTIONS => "1) 기본 자재 변경  2) 언어 변경",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_MATERIAL_OPTIONS => "1) steel  2) wood  3) concrete",
        SETTINGS_LANG_OPTIONS => "1) auto  2) ko  3) en",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 변경되었습니다.",
        HELP_INDICES => "도움말: 단계마다 연도 → CPI → 단가 → 필요 자재량 → 재사용률[%] 순으로 입력합니다. 첫 단계의 이월 자재량은 첫 단계 필요량으로 시드됩니다.",
        HELP_COSTS => "도움말: 단계별 연도/CPI/단가를 입력하면 기준 연도 구매력으로 환산한 단가와 명목 단가를 비교합니다.",
        COL_PHASE => "단계",
        COL_YEAR => "연도",
        COL_CPI => "CPI",
        COL_PRICE => "단가",
        COL_REQUIREMENT => "필요량 [ton]",
        COL_REUSE => "재사용 [%]",
        COL_FDCI_NO => "FDCI (무보정)",
        COL_FDCI_WITH => "FDCI (보정)",
        COL_DCI => "DCI",
        COL_NOMINAL => "명목 단가",
        COL_ADJUSTED => "보정 단가",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Circularity Toolbox (FDCI/DCI) ===",
        MAIN_MENU_INDICES => "1) FDCI/DCI indices",
        MAIN_MENU_COSTS => "2) Material-cost comparison (inflation adjusted)",
        MAIN_MENU_BROWSE_CPI => "3) Browse CPI database",
        MAIN_MENU_BROWSE_PRICES => "4) Browse material price database",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_REQUIRE_POSITIVE => "Please enter a value greater than zero.",
        ERROR_REUSE_RANGE => "Please enter a value between 0 and 100.",
        PROMPT_SELECT => "Select: ",
        INDICES_HEADING => "\n-- FDCI/DCI indices --",
        PROMPT_MATERIAL => "Material (steel/wood/concrete, enter=default): ",
        PROMPT_NUM_PHASES => "Number of phases (1-25): ",
        PROMPT_USE_CPI_DB => "Use the CPI database for per-year values? (y/n): ",
        PROMPT_USE_PRICE_DB => "Use the price database for per-year values? (y/n): ",
        PHASE_LABEL => "Phase",
        PROMPT_YEAR => "Year: ",
        PROMPT_CPI_MANUAL => "CPI (manual): ",
        PROMPT_PRICE_MANUAL => "Material price [USD/unit] (manual): ",
        PROMPT_REQUIREMENT => "Material required [tons]: ",
        PROMPT_REUSE_FACTOR => "Reuse factor [%] (0-100): ",
        WARN_CPI_DEFAULTED => "Note: CPI missing for that year, using default 100:",
        WARN_PRICE_DEFAULTED => "Note: price missing for that year, using default 500:",
        RECAP_HEADING => "\n[Input recap]",
        RESULT_HEADING => "\n[Results]",
        PROMPT_EXPORT_CHARTS => "Save charts as PNG? (y/n): ",
        PROMPT_EXPORT_DIR => "Output directory (enter=configured): ",
        EXPORT_SAVED => "Chart saved:",
        COSTS_HEADING => "\n-- Material-cost comparison --",
        COSTS_RESULT_HEADING => "\n[Cost comparison: base-year purchasing power]",
        BROWSE_CPI_HEADING => "\n-- CPI database --",
        BROWSE_PRICES_HEADING => "\n-- Material price database --",
        DB_YEAR_RANGE => "Table year range:",
        DB_EMPTY => "The table is empty.",
        PROMPT_YEAR_OR_BLANK => "Enter year (blank to finish): ",
        LOOKUP_DEFAULTED_NOTE => "(defaulted)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_MATERIAL => "Default material:",
        SETTINGS_OPTIONS => "1) Change default material  2) Change language",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_MATERIAL_OPTIONS => "1) steel  2) wood  3) concrete",
        SETTINGS_LANG_OPTIONS => "1) auto  2) ko  3) en",
        SETTINGS_INVALID => "Invalid input; settings unchanged.",
        SETTINGS_SAVED => "Settings updated.",
        HELP_INDICES => "Help: per phase enter year, CPI, price, material requirement and reuse factor [%]. Phase 1 carry-over is seeded from the phase-1 requirement.",
        HELP_COSTS => "Help: enter per-phase year/CPI/price to compare nominal prices against base-year purchasing power.",
        COL_PHASE => "Phase",
        COL_YEAR => "Year",
        COL_CPI => "CPI",
        COL_PRICE => "Price",
        COL_REQUIREMENT => "Req. [ton]",
        COL_REUSE => "Reuse [%]",
        COL_FDCI_NO => "FDCI (no infl.)",
        COL_FDCI_WITH => "FDCI (infl.)",
        COL_DCI => "DCI",
        COL_NOMINAL => "Nominal",
        COL_ADJUSTED => "Infl. adjusted",
        _ => return None,
    })
}
