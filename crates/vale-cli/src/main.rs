//! Command-line harness for the terrain core: generate a grid snapshot and
//! run the read-only queries against it.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::info;
use serde::Serialize;
use vale_core::{
    deserialize, extract_contours, generate, landmarks, place_fauna, serialize, FaunaRequest,
    GenerationRequest, Grid, Preset, Window,
};

#[derive(Parser, Debug)]
#[command(name = "vale", about = "Synthetic village terrain generator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a grid and write it as a JSON snapshot.
    Generate {
        #[arg(short = 'W', long, default_value_t = 1000)]
        width: usize,
        #[arg(short = 'H', long, default_value_t = 1000)]
        height: usize,
        /// lowlands, hills or mountains.
        #[arg(short, long)]
        preset: Option<Preset>,
        #[arg(long)]
        min_elevation: Option<f32>,
        #[arg(long)]
        max_elevation: Option<f32>,
        /// Random seed (a fresh one is drawn if not given).
        #[arg(short, long)]
        seed: Option<u64>,
        /// Read the whole request from a JSON file instead of flags.
        #[arg(long, conflicts_with_all = ["preset", "min_elevation", "max_elevation", "seed"])]
        request: Option<PathBuf>,
        /// Output path; stdout if omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print grid statistics.
    Info {
        #[command(flatten)]
        input: Input,
    },
    /// Extract contour segments.
    Contours {
        #[command(flatten)]
        input: Input,
        #[command(flatten)]
        window: WindowArgs,
        /// Contour spacing in metres.
        #[arg(long, default_value_t = 1.0)]
        interval: f64,
    },
    /// Place foxes and hares.
    Fauna {
        #[command(flatten)]
        input: Input,
        #[arg(long, default_value_t = 8)]
        foxes: usize,
        #[arg(long, default_value_t = 18)]
        hares: usize,
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// List thinned peak and valley markers.
    Landmarks {
        #[command(flatten)]
        input: Input,
        #[command(flatten)]
        window: WindowArgs,
        /// Minimum distance between markers of one kind, in cells.
        #[arg(long, default_value_t = 20.0)]
        spacing: f64,
    },
}

#[derive(ClapArgs, Debug)]
struct Input {
    /// Snapshot to read; stdin if omitted.
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct WindowArgs {
    /// Window as min_x,min_y,max_x,max_y (whole grid if omitted).
    #[arg(long, value_delimiter = ',', num_args = 4)]
    window: Option<Vec<usize>>,
}

impl WindowArgs {
    fn resolve(&self, grid: &Grid) -> Window {
        match self.window.as_deref() {
            Some(&[x0, y0, x1, y1]) => Window::new(x0, y0, x1, y1),
            _ => Window::full(grid),
        }
    }
}

fn read_grid(input: &Input) -> Result<Grid> {
    let text = match &input.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s).context("reading snapshot from stdin")?;
            s
        }
    };
    Ok(deserialize(&text)?)
}

fn write_text(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Command::Generate { width, height, preset, min_elevation, max_elevation, seed, request, output } => {
            let request = match request {
                Some(path) => {
                    let text = fs::read_to_string(&path)
                        .with_context(|| format!("reading request {}", path.display()))?;
                    serde_json::from_str(&text)
                        .with_context(|| format!("parsing request {}", path.display()))?
                }
                None => GenerationRequest { width, height, preset, min_elevation, max_elevation, seed },
            };
            let t0 = Instant::now();
            let grid = generate(&request)?;
            info!("generation took {:.2}s", t0.elapsed().as_secs_f64());
            write_text(output.as_deref(), &serialize(&grid)?)?;
        }
        Command::Info { input } => {
            let grid = read_grid(&input)?;
            print_json(&grid.stats())?;
        }
        Command::Contours { input, window, interval } => {
            let grid = read_grid(&input)?;
            let segments = extract_contours(&grid, window.resolve(&grid), interval)?;
            info!("{} contour segments", segments.len());
            print_json(&segments)?;
        }
        Command::Fauna { input, foxes, hares, seed } => {
            let grid = read_grid(&input)?;
            let animals = place_fauna(&grid, &FaunaRequest { fox: foxes, hare: hares, seed });
            info!("placed {} of {} animals", animals.len(), foxes.saturating_add(hares));
            print_json(&animals)?;
        }
        Command::Landmarks { input, window, spacing } => {
            let grid = read_grid(&input)?;
            print_json(&landmarks(&grid, window.resolve(&grid), spacing))?;
        }
    }

    Ok(())
}
