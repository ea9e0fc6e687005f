//! Headless forest-fire benchmark driver
//!
//! Runs the parallel step engine for a fixed number of generations and
//! reports wall-clock timing, optionally appending a CSV row for
//! cross-implementation comparison.

use std::fs::OpenOptions;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;
use forest_fire_core::{GridState, StepEngine, DEFAULT_TREE_DENSITY};

/// Forest-fire spread benchmark with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire-bench")]
#[command(about = "Parallel forest-fire cellular automaton benchmark", long_about = None)]
struct Args {
    /// Grid side length in cells (the grid is `size` x `size`)
    #[arg(short, long, default_value_t = 1000)]
    size: usize,

    /// Number of simulation steps
    #[arg(long, default_value_t = 100)]
    steps: usize,

    /// Probability that a cell starts as a tree
    #[arg(short, long, default_value_t = DEFAULT_TREE_DENSITY)]
    density: f64,

    /// Worker threads per step (default: available hardware parallelism)
    #[arg(short, long)]
    threads: Option<usize>,

    /// RNG seed for a reproducible initial grid
    #[arg(long)]
    seed: Option<u64>,

    /// Append a `Rust,<size>,<seconds>` CSV row to this file
    #[arg(long)]
    append_to: Option<PathBuf>,

    /// Print a census line every N steps (0 = off)
    #[arg(short, long, default_value_t = 0)]
    report_interval: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let threads = args
        .threads
        .unwrap_or_else(|| std::thread::available_parallelism().map_or(1, NonZeroUsize::get));

    println!("Initializing Grid: {}x{} | Threads: {}", args.size, args.size, threads);

    let mut grid = match GridState::with_options(args.size, args.density, args.seed) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };
    let engine = match StepEngine::new(threads) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    let start = Instant::now();

    for step in 1..=args.steps {
        engine.step(&mut grid);

        if args.report_interval > 0 && step % args.report_interval == 0 {
            let census = grid.census();
            println!(
                "Step {step}: {} trees, {} burning, {} empty",
                census.trees, census.burning, census.empty
            );
        }
    }

    let duration = start.elapsed();

    println!("Simulation completed in: {duration:?}");
    if args.steps > 0 {
        println!("Time per step: {:?}", duration / args.steps as u32);
    }

    if let Some(path) = &args.append_to {
        if let Err(e) = append_result(path, args.size, duration.as_secs_f64()) {
            eprintln!("Failed to append results to {}: {e}", path.display());
            process::exit(1);
        }
    }
}

/// Append one `Rust,<size>,<seconds>` row to the shared benchmark CSV.
fn append_result(path: &Path, size: usize, seconds: f64) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "Rust,{size},{seconds}")
}
