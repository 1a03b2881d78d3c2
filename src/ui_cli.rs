use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::app::AppError;
use crate::chart::{self, ChartOptions, Series};
use crate::circularity::{self, IndexSeries, PhaseInput};
use crate::config::Config;
use crate::db::{CpiTable, LookupValue, MaterialKind, PriceTable};
use crate::i18n::{keys, Translator};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Indices,
    Costs,
    BrowseCpi,
    BrowsePrices,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_INDICES));
    println!("{}", tr.t(keys::MAIN_MENU_COSTS));
    println!("{}", tr.t(keys::MAIN_MENU_BROWSE_CPI));
    println!("{}", tr.t(keys::MAIN_MENU_BROWSE_PRICES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Indices),
            "2" => return Ok(MenuChoice::Costs),
            "3" => return Ok(MenuChoice::BrowseCpi),
            "4" => return Ok(MenuChoice::BrowsePrices),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// FDCI/DCI 지수 계산 메뉴를 처리한다.
pub fn handle_indices(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INDICES_HEADING));
    println!("{}", tr.t(keys::HELP_INDICES));

    let data_dir = data_dir_of(cfg);
    let material = read_material(tr, cfg.default_material)?;
    let cpi_table = CpiTable::load(data_dir.as_deref())?;
    let price_table = PriceTable::load(material, data_dir.as_deref())?;

    let num_phases = read_num_phases(tr)?;
    let use_cpi_db = read_yes_no(tr, tr.t(keys::PROMPT_USE_CPI_DB))?;
    let use_price_db = read_yes_no(tr, tr.t(keys::PROMPT_USE_PRICE_DB))?;

    let mut phases = Vec::with_capacity(num_phases);
    for i in 0..num_phases {
        println!("\n{} {}", tr.t(keys::PHASE_LABEL), i + 1);
        let year = read_i32(tr, tr.t(keys::PROMPT_YEAR))?;
        let cpi = read_cpi(tr, &cpi_table, use_cpi_db, year)?;
        let price = read_price(tr, &price_table, use_price_db, year)?;
        let material_required = read_positive_f64(tr, tr.t(keys::PROMPT_REQUIREMENT))?;
        let reuse_factor_pct = read_reuse_factor(tr)?;
        phases.push(PhaseInput {
            year,
            price,
            reuse_factor_pct,
            material_required,
            cpi,
        });
    }

    print_recap(tr, material, &phases);

    let series = circularity::compute_indices(&phases)?;
    print_index_results(tr, &phases, &series);

    if read_yes_no(tr, tr.t(keys::PROMPT_EXPORT_CHARTS))? {
        let dir = read_export_dir(tr, cfg)?;
        export_index_charts(tr, &dir, &phases, &series)?;
    }
    Ok(())
}

/// 자재 단가 비교 메뉴를 처리한다.
pub fn handle_costs(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COSTS_HEADING));
    println!("{}", tr.t(keys::HELP_COSTS));

    let data_dir = data_dir_of(cfg);
    let material = read_material(tr, cfg.default_material)?;
    let cpi_table = CpiTable::load(data_dir.as_deref())?;
    let price_table = PriceTable::load(material, data_dir.as_deref())?;

    let num_phases = read_num_phases(tr)?;
    let use_cpi_db = read_yes_no(tr, tr.t(keys::PROMPT_USE_CPI_DB))?;
    let use_price_db = read_yes_no(tr, tr.t(keys::PROMPT_USE_PRICE_DB))?;

    let mut years = Vec::with_capacity(num_phases);
    let mut prices = Vec::with_capacity(num_phases);
    let mut cpis = Vec::with_capacity(num_phases);
    for i in 0..num_phases {
        println!("\n{} {}", tr.t(keys::PHASE_LABEL), i + 1);
        let year = read_i32(tr, tr.t(keys::PROMPT_YEAR))?;
        years.push(year);
        cpis.push(read_cpi(tr, &cpi_table, use_cpi_db, year)?);
        prices.push(read_price(tr, &price_table, use_price_db, year)?);
    }

    let comparison = circularity::material_costs(&prices, &cpis)?;

    println!("{}", tr.t(keys::COSTS_RESULT_HEADING));
    println!(
        "{:>5} {:>6} {:>14} {:>18}",
        tr.t(keys::COL_PHASE),
        tr.t(keys::COL_YEAR),
        tr.t(keys::COL_NOMINAL),
        tr.t(keys::COL_ADJUSTED)
    );
    for i in 0..num_phases {
        println!(
            "{:>5} {:>6} {:>14.2} {:>18.2}",
            i + 1,
            years[i],
            comparison.non_adjusted[i],
            comparison.inflation_adjusted[i]
        );
    }

    if read_yes_no(tr, tr.t(keys::PROMPT_EXPORT_CHARTS))? {
        let dir = read_export_dir(tr, cfg)?;
        let xs: Vec<f64> = years.iter().map(|y| *y as f64).collect();
        let nominal = pair_points(&xs, &comparison.non_adjusted);
        let adjusted = pair_points(&xs, &comparison.inflation_adjusted);
        let path = dir.join("cost_comparison.png");
        chart::render_line_chart(
            &path,
            ChartOptions::default(),
            &[
                Series {
                    color: chart::COLOR_BLUE,
                    points: &nominal,
                },
                Series {
                    color: chart::COLOR_GREEN,
                    points: &adjusted,
                },
            ],
        )?;
        println!("{} {}", tr.t(keys::EXPORT_SAVED), path.display());
    }
    Ok(())
}

/// CPI 데이터베이스 조회 메뉴를 처리한다.
pub fn handle_browse_cpi(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BROWSE_CPI_HEADING));
    let table = CpiTable::load(data_dir_of(cfg).as_deref())?;
    match table.year_range() {
        Some((min, max)) => println!("{} {min}~{max}", tr.t(keys::DB_YEAR_RANGE)),
        None => {
            println!("{}", tr.t(keys::DB_EMPTY));
            return Ok(());
        }
    }
    loop {
        let s = read_line(tr.t(keys::PROMPT_YEAR_OR_BLANK))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        match trimmed.parse::<i32>() {
            Ok(year) => print_lookup(tr, table.lookup(year)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 자재 단가 데이터베이스 조회 메뉴를 처리한다.
pub fn handle_browse_prices(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BROWSE_PRICES_HEADING));
    let material = read_material(tr, cfg.default_material)?;
    let table = PriceTable::load(material, data_dir_of(cfg).as_deref())?;
    match table.year_range() {
        Some((min, max)) => println!("{} {min}~{max}", tr.t(keys::DB_YEAR_RANGE)),
        None => {
            println!("{}", tr.t(keys::DB_EMPTY));
            return Ok(());
        }
    }
    loop {
        let s = read_line(tr.t(keys::PROMPT_YEAR_OR_BLANK))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(());
        }
        match trimmed.parse::<i32>() {
            Ok(year) => print_lookup(tr, table.lookup(year)),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_MATERIAL),
        cfg.default_material.as_str()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_MATERIAL_OPTIONS));
            let m = read_line(tr.t(keys::PROMPT_SELECT))?;
            cfg.default_material = match m.trim() {
                "1" => MaterialKind::Steel,
                "2" => MaterialKind::Wood,
                "3" => MaterialKind::Concrete,
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            };
        }
        "2" => {
            println!("{}", tr.t(keys::SETTINGS_LANG_OPTIONS));
            let l = read_line(tr.t(keys::PROMPT_SELECT))?;
            cfg.language = match l.trim() {
                "1" => "auto".to_string(),
                "2" => "ko".to_string(),
                "3" => "en".to_string(),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            };
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn data_dir_of(cfg: &Config) -> Option<PathBuf> {
    cfg.data_dir.as_ref().map(PathBuf::from)
}

fn print_lookup(tr: &Translator, lv: LookupValue) {
    if lv.defaulted {
        println!("{}: {:.1} {}", lv.year, lv.value, tr.t(keys::LOOKUP_DEFAULTED_NOTE));
    } else {
        println!("{}: {:.1}", lv.year, lv.value);
    }
}

fn print_recap(tr: &Translator, material: MaterialKind, phases: &[PhaseInput]) {
    println!("{}", tr.t(keys::RECAP_HEADING));
    println!(
        "{:>5} {:>6} {:>8} {:>12} {:>12} {:>10}",
        tr.t(keys::COL_PHASE),
        tr.t(keys::COL_YEAR),
        tr.t(keys::COL_CPI),
        format!("{} ({})", tr.t(keys::COL_PRICE), material.as_str()),
        tr.t(keys::COL_REQUIREMENT),
        tr.t(keys::COL_REUSE)
    );
    for (i, p) in phases.iter().enumerate() {
        println!(
            "{:>5} {:>6} {:>8.1} {:>12.2} {:>12.1} {:>10.1}",
            i + 1,
            p.year,
            p.cpi,
            p.price,
            p.material_required,
            p.reuse_factor_pct
        );
    }
}

fn print_index_results(tr: &Translator, phases: &[PhaseInput], series: &IndexSeries) {
    println!("{}", tr.t(keys::RESULT_HEADING));
    println!(
        "{:>5} {:>6} {:>16} {:>16} {:>12}",
        tr.t(keys::COL_PHASE),
        tr.t(keys::COL_YEAR),
        tr.t(keys::COL_FDCI_NO),
        tr.t(keys::COL_FDCI_WITH),
        tr.t(keys::COL_DCI)
    );
    for (i, p) in phases.iter().enumerate() {
        println!(
            "{:>5} {:>6} {:>16.6} {:>16.6} {:>12.6}",
            i + 1,
            p.year,
            series.fdci_no_inflation[i],
            series.fdci_with_inflation[i],
            series.dci[i]
        );
    }
}

/// 원본 앱과 같은 세 장의 차트를 저장한다: FDCI 비교, DCI 추이, FDCI+DCI 비교.
fn export_index_charts(
    tr: &Translator,
    dir: &Path,
    phases: &[PhaseInput],
    series: &IndexSeries,
) -> Result<(), AppError> {
    let xs: Vec<f64> = phases.iter().map(|p| p.year as f64).collect();
    let fdci_no = pair_points(&xs, &series.fdci_no_inflation);
    let fdci_with = pair_points(&xs, &series.fdci_with_inflation);
    let dci = pair_points(&xs, &series.dci);

    let charts: [(&str, Vec<Series<'_>>); 3] = [
        (
            "fdci_comparison.png",
            vec![
                Series {
                    color: chart::COLOR_BLUE,
                    points: &fdci_no,
                },
                Series {
                    color: chart::COLOR_GREEN,
                    points: &fdci_with,
                },
            ],
        ),
        (
            "dci_comparison.png",
            vec![Series {
                color: chart::COLOR_RED,
                points: &dci,
            }],
        ),
        (
            "fdci_dci_comparison.png",
            vec![
                Series {
                    color: chart::COLOR_BLUE,
                    points: &fdci_no,
                },
                Series {
                    color: chart::COLOR_RED,
                    points: &dci,
                },
            ],
        ),
    ];

    for (name, series) in &charts {
        let path = dir.join(name);
        chart::render_line_chart(&path, ChartOptions::default(), series)?;
        println!("{} {}", tr.t(keys::EXPORT_SAVED), path.display());
    }
    Ok(())
}

fn pair_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter().copied().zip(ys.iter().copied()).collect()
}

fn read_material(tr: &Translator, default: MaterialKind) -> Result<MaterialKind, AppError> {
    loop {
        let s = read_line(tr.t(keys::PROMPT_MATERIAL))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        if let Some(kind) = MaterialKind::parse(trimmed) {
            return Ok(kind);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_num_phases(tr: &Translator) -> Result<usize, AppError> {
    loop {
        let s = read_line(tr.t(keys::PROMPT_NUM_PHASES))?;
        if let Ok(n) = s.trim().parse::<usize>() {
            if (1..=25).contains(&n) {
                return Ok(n);
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_cpi(
    tr: &Translator,
    table: &CpiTable,
    use_db: bool,
    year: i32,
) -> Result<f64, AppError> {
    if use_db {
        let lv = table.lookup(year);
        if lv.defaulted {
            println!("{} {}", tr.t(keys::WARN_CPI_DEFAULTED), year);
        }
        Ok(lv.value)
    } else {
        read_positive_f64(tr, tr.t(keys::PROMPT_CPI_MANUAL))
    }
}

fn read_price(
    tr: &Translator,
    table: &PriceTable,
    use_db: bool,
    year: i32,
) -> Result<f64, AppError> {
    if use_db {
        let lv = table.lookup(year);
        if lv.defaulted {
            println!("{} {}", tr.t(keys::WARN_PRICE_DEFAULTED), year);
        }
        Ok(lv.value)
    } else {
        read_f64(tr, tr.t(keys::PROMPT_PRICE_MANUAL))
    }
}

fn read_reuse_factor(tr: &Translator) -> Result<f64, AppError> {
    loop {
        let v = read_f64(tr, tr.t(keys::PROMPT_REUSE_FACTOR))?;
        if (0.0..=100.0).contains(&v) {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_REUSE_RANGE));
    }
}

fn read_export_dir(tr: &Translator, cfg: &Config) -> Result<PathBuf, AppError> {
    let s = read_line(tr.t(keys::PROMPT_EXPORT_DIR))?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Ok(PathBuf::from(&cfg.chart_dir))
    } else {
        Ok(PathBuf::from(trimmed))
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_positive_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let v = read_f64(tr, prompt)?;
        if v > 0.0 {
            return Ok(v);
        }
        println!("{}", tr.t(keys::ERROR_REQUIRE_POSITIVE));
    }
}

fn read_i32(tr: &Translator, prompt: &str) -> Result<i32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<i32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(tr: &Translator, prompt: &str) -> Result<bool, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}
