//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the solver on *your* machine.
//! - Loads the dictionary once, then solves each grid several times and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Your own grid (repeatable):     `cargo run --bin bench_local --release -- -g my_grid.txt`
//! - Parallel search:                `cargo run --bin bench_local --release --features parallel -- --parallel`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparisons.
//! - One warm-up run per grid is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use boggle::dictionary::Dictionary;
use boggle::grid::Grid;
use boggle::solver::{self, SolveResult};
use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    dictionary: String,

    /// Grid files to time (defaults to the bundled sample grids)
    #[arg(short, long = "grid")]
    grids: Vec<String>,

    /// Number of repeats per grid (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Search start cells in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,
}

fn default_grids() -> Vec<String> {
    ["grid_4x4.txt", "grid_5x5.txt"]
        .iter()
        .map(|name| format!("{}/data/{name}", env!("CARGO_MANIFEST_DIR")))
        .collect()
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        (xs[n / 2 - 1] + xs[n / 2]) / 2.0
    }
}

fn run_once(dictionary: &Dictionary, grid: &Grid, parallel: bool) -> SolveResult {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return solver::solve_parallel(dictionary.trie(), grid);
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;
    solver::solve(dictionary.trie(), grid)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let grids = if cli.grids.is_empty() { default_grids() } else { cli.grids };

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    println!(
        "Loaded {} words in {:.3}s",
        dictionary.len(),
        t_load.elapsed().as_secs_f64()
    );

    println!("\n{:<40} {:>7} {:>12} {:>12}", "grid", "words", "cells", "median (ms)");
    for path in &grids {
        let grid = Grid::load_from_path(path)?;

        // warm-up
        let warm = run_once(&dictionary, &grid, cli.parallel);

        let times: Vec<f64> = (0..cli.num_repeats.max(1))
            .map(|_| {
                let t = Instant::now();
                black_box(run_once(black_box(&dictionary), black_box(&grid), cli.parallel));
                t.elapsed().as_secs_f64() * 1000.0
            })
            .collect();

        println!(
            "{:<40} {:>7} {:>12} {:>12.3}",
            path.rsplit('/').next().unwrap_or(path),
            warm.len(),
            warm.stats.cells_entered,
            median(times)
        );
    }

    Ok(())
}
