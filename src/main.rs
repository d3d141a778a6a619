use clap::Parser;
use std::process::ExitCode;
use std::time::Instant;

use boggle::dictionary::Dictionary;
use boggle::errors::PuzzleError;
use boggle::grid::Grid;
use boggle::solver;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Boggle solver: print every dictionary word hidden in a letter grid
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Path to the dictionary file (one word per line, at least two characters each)
    dictionary: String,

    /// Path to the grid file (one row per line, all rows the same length)
    grid: String,

    /// Search start cells in parallel (needs the `parallel` feature)
    #[arg(short, long)]
    parallel: bool,

    /// Only print the found words
    #[arg(short, long)]
    quiet: bool,
}

/// Entry point of the Boggle CLI.
///
/// Delegates to [`try_main`], printing any load error with its code and help text
/// before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("BOGGLE_DEBUG").is_ok();
    boggle::log::init_logger(debug_enabled);

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            ExitCode::FAILURE
        }
    }
}

/// Load both inputs, solve, and print one `word\tx\ty\tpath` line per result on stdout.
/// The grid echo and timings go to stderr.
fn try_main() -> Result<(), PuzzleError> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let dictionary = Dictionary::load_from_path(&cli.dictionary)?;
    let grid = Grid::load_from_path(&cli.grid)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    if !cli.quiet {
        eprintln!("Puzzle grid ({}x{}):", grid.width(), grid.height());
        eprint!("{grid}");
    }

    let result = run_solver(&dictionary, &grid, cli.parallel);

    for found in &result.found {
        println!("{found}");
    }

    if !cli.quiet {
        eprintln!(
            "Loaded {} words in {:.3}s; solved in {:.3}s ({} words found, {} cells entered).",
            dictionary.len(),
            load_secs,
            result.stats.elapsed.as_secs_f64(),
            result.len(),
            result.stats.cells_entered
        );
    }

    Ok(())
}

#[cfg(feature = "parallel")]
fn run_solver(dictionary: &Dictionary, grid: &Grid, parallel: bool) -> solver::SolveResult {
    if parallel {
        solver::solve_parallel(dictionary.trie(), grid)
    } else {
        solver::solve(dictionary.trie(), grid)
    }
}

#[cfg(not(feature = "parallel"))]
fn run_solver(dictionary: &Dictionary, grid: &Grid, parallel: bool) -> solver::SolveResult {
    if parallel {
        log::warn!("built without the `parallel` feature; searching sequentially");
    }
    solver::solve(dictionary.trie(), grid)
}
