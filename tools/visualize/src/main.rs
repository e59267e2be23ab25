//! Diagnostic visualizer: writes land-cover and contour PNGs for one grid.
//! Not part of the main pipeline.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use image::{Rgb, RgbImage};
use vale_core::{
    extract_contours, generate, landmarks, ContourSegment, GenerationRequest, Grid, Preset, Window,
};

#[derive(Parser, Debug)]
#[command(name = "visualize", about = "Render a generated grid to PNG")]
struct Args {
    #[arg(short = 'W', long, default_value_t = 1000)]
    width: usize,
    #[arg(short = 'H', long, default_value_t = 1000)]
    height: usize,
    #[arg(short, long, default_value = "hills")]
    preset: Preset,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Contour spacing in metres.
    #[arg(short, long, default_value_t = 5.0)]
    interval: f64,
    #[arg(short, long, default_value = "data/debug")]
    out_dir: PathBuf,
}

// ── Colour helpers ────────────────────────────────────────────────────────────

/// Elevation in [0, 1] → pale pink to deep red.
fn shade(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let g = (240.0 - (240.0 - 34.0) * t) as u8;
    let b = (250.0 - (250.0 - 34.0) * t) as u8;
    [255, g, b]
}

/// Contour colour ramps from light pink to burgundy with elevation.
fn contour_color(t: f64) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    Rgb([
        (255.0 * (1.0 - t) + 128.0 * t) as u8,
        (204.0 * (1.0 - t)) as u8,
        (204.0 * (1.0 - t) + 32.0 * t) as u8,
    ])
}

fn draw_segment(img: &mut RgbImage, s: &ContourSegment, color: Rgb<u8>) {
    let steps = ((s.x2 - s.x1).abs().max((s.y2 - s.y1).abs()) * 2.0).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (s.x1 + (s.x2 - s.x1) * t).round() as u32;
        let y = (s.y1 + (s.y2 - s.y1) * t).round() as u32;
        if x < img.width() && y < img.height() {
            img.put_pixel(x, y, color);
        }
    }
}

fn draw_cross(img: &mut RgbImage, x: usize, y: usize, r: i64) {
    for d in -r..=r {
        for (px, py) in [(x as i64 + d, y as i64 + d), (x as i64 + d, y as i64 - d)] {
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, Rgb([40, 40, 40]));
            }
        }
    }
}

fn land_cover_image(grid: &Grid) -> RgbImage {
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            img.put_pixel(x as u32, y as u32, Rgb(grid.get(x, y).land_cover.color()));
        }
    }
    img
}

fn relief_image(grid: &Grid, interval: f64) -> Result<RgbImage> {
    let (lo, hi) = (grid.min_elevation(), grid.max_elevation());
    let span = (hi - lo).max(f32::EPSILON);
    let mut img = RgbImage::new(grid.width() as u32, grid.height() as u32);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            img.put_pixel(x as u32, y as u32, Rgb(shade((grid.elevation(x, y) - lo) / span)));
        }
    }

    let segments = extract_contours(grid, Window::full(grid), interval)?;
    for s in &segments {
        let t = (s.isovalue - lo as f64) / span as f64;
        draw_segment(&mut img, s, contour_color(t));
    }

    let marks = landmarks(grid, Window::full(grid), 20.0);
    for p in marks.peaks.iter().chain(&marks.valleys) {
        draw_cross(&mut img, p.x, p.y, 3);
    }
    Ok(img)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let request = GenerationRequest::new(args.width, args.height)
        .with_preset(args.preset)
        .with_seed(args.seed);

    println!("Generating {}×{} ({:?}, seed {})…", args.width, args.height, args.preset, args.seed);
    let grid = generate(&request)?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("cannot create {}", args.out_dir.display()))?;

    let path = args.out_dir.join("land_cover.png");
    land_cover_image(&grid).save(&path).with_context(|| format!("failed to save {}", path.display()))?;
    println!("Wrote {}", path.display());

    let path = args.out_dir.join("relief.png");
    relief_image(&grid, args.interval)?
        .save(&path)
        .with_context(|| format!("failed to save {}", path.display()))?;
    println!("Wrote {}", path.display());

    Ok(())
}
