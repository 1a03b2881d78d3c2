//! `image` 크레이트로 선 그래프를 래스터라이즈해 PNG로 저장한다.
//!
//! 축/격자/꺾은선/마커만 그리는 최소한의 렌더러다. 텍스트 라벨·범례 같은
//! 스타일 요소는 범위 밖이며, 시리즈 구분은 색상으로 한다.

use std::path::Path;

use image::{Rgb, RgbImage};

pub const COLOR_BLUE: Rgb<u8> = Rgb([31, 94, 204]);
pub const COLOR_GREEN: Rgb<u8> = Rgb([34, 139, 62]);
pub const COLOR_RED: Rgb<u8> = Rgb([204, 41, 41]);

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([40, 40, 40]);
const GRID: Rgb<u8> = Rgb([220, 220, 220]);

const MARGIN: u32 = 40;
const GRID_LINES: u32 = 5;

/// 그래프에 올릴 시리즈 하나. x는 연도, y는 지수/단가 값.
#[derive(Debug, Clone)]
pub struct Series<'a> {
    pub color: Rgb<u8>,
    pub points: &'a [(f64, f64)],
}

/// 캔버스 크기 지정. 기본 1000x600.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// 차트 렌더링/저장 오류.
#[derive(Debug)]
pub enum ChartError {
    /// 그릴 점이 하나도 없음
    NoData,
    /// 캔버스가 여백보다 작음
    CanvasTooSmall,
    /// PNG 저장 오류
    Image(image::ImageError),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::NoData => write!(f, "그릴 데이터가 없습니다"),
            ChartError::CanvasTooSmall => write!(f, "캔버스 크기가 너무 작습니다"),
            ChartError::Image(e) => write!(f, "이미지 저장 오류: {e}"),
        }
    }
}

impl std::error::Error for ChartError {}

impl From<image::ImageError> for ChartError {
    fn from(value: image::ImageError) -> Self {
        ChartError::Image(value)
    }
}

/// 시리즈들을 하나의 선 그래프로 그려 PNG 파일로 저장한다.
pub fn render_line_chart(
    path: &Path,
    options: ChartOptions,
    series: &[Series<'_>],
) -> Result<(), ChartError> {
    let img = draw_line_chart(options, series)?;
    img.save(path)?;
    Ok(())
}

/// 시리즈들을 메모리 상의 RGB 이미지로 렌더링한다.
pub fn draw_line_chart(
    options: ChartOptions,
    series: &[Series<'_>],
) -> Result<RgbImage, ChartError> {
    if series.iter().all(|s| s.points.is_empty()) {
        return Err(ChartError::NoData);
    }
    if options.width <= MARGIN * 3 || options.height <= MARGIN * 3 {
        return Err(ChartError::CanvasTooSmall);
    }

    let (x_min, x_max) = padded_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
    let (y_min, y_max) = padded_range(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

    let mut img = RgbImage::from_pixel(options.width, options.height, BACKGROUND);

    let plot_left = MARGIN;
    let plot_right = options.width - MARGIN;
    let plot_top = MARGIN;
    let plot_bottom = options.height - MARGIN;

    // 격자
    for i in 1..=GRID_LINES {
        let x = plot_left + (plot_right - plot_left) * i / (GRID_LINES + 1);
        draw_vline(&mut img, x, plot_top, plot_bottom, GRID);
        let y = plot_top + (plot_bottom - plot_top) * i / (GRID_LINES + 1);
        draw_hline(&mut img, y, plot_left, plot_right, GRID);
    }

    // 축
    draw_hline(&mut img, plot_bottom, plot_left, plot_right, AXIS);
    draw_vline(&mut img, plot_left, plot_top, plot_bottom, AXIS);

    let to_px = |(x, y): (f64, f64)| -> (f64, f64) {
        let fx = (x - x_min) / (x_max - x_min);
        let fy = (y - y_min) / (y_max - y_min);
        (
            plot_left as f64 + fx * (plot_right - plot_left) as f64,
            plot_bottom as f64 - fy * (plot_bottom - plot_top) as f64,
        )
    };

    for s in series {
        for pair in s.points.windows(2) {
            draw_segment(&mut img, to_px(pair[0]), to_px(pair[1]), s.color);
        }
        for p in s.points {
            draw_marker(&mut img, to_px(*p), s.color);
        }
    }

    Ok(img)
}

/// 값 범위를 구하고 양 끝에 5% 여유를 둔다. 값이 모두 같으면 ±0.5로 벌린다.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

fn put_pixel_checked(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_hline(img: &mut RgbImage, y: u32, x0: u32, x1: u32, color: Rgb<u8>) {
    for x in x0..=x1 {
        img.put_pixel(x, y, color);
    }
}

fn draw_vline(img: &mut RgbImage, x: u32, y0: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..=y1 {
        img.put_pixel(x, y, color);
    }
}

/// 두 점 사이를 보간 샘플링으로 잇는다. 선 두께는 2px.
fn draw_segment(img: &mut RgbImage, from: (f64, f64), to: (f64, f64), color: Rgb<u8>) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (from.0 + dx * t).round() as i64;
        let y = (from.1 + dy * t).round() as i64;
        put_pixel_checked(img, x, y, color);
        put_pixel_checked(img, x, y + 1, color);
    }
}

fn draw_marker(img: &mut RgbImage, at: (f64, f64), color: Rgb<u8>) {
    let cx = at.0.round() as i64;
    let cy = at.1.round() as i64;
    for dx in -2..=2 {
        for dy in -2..=2 {
            put_pixel_checked(img, cx + dx, cy + dy, color);
        }
    }
}
