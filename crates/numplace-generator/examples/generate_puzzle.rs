//! Example demonstrating seeded puzzle generation.
//!
//! Generates a puzzle and prints the seed, the playable grid, and its
//! solution. With `--samples N` it generates N puzzles in parallel and
//! keeps the one with the fewest clues.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Replay a specific seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Carve harder and sample for the sparsest result:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty 30 --samples 100
//! ```
//!
//! Emit the wire-format JSON instead of grid text:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --json
//! ```

use std::process;

use clap::Parser;
use numplace_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Carving target: stop once at most this many clues remain.
    #[arg(long, value_name = "CLUES", default_value_t = PuzzleGenerator::DEFAULT_DIFFICULTY)]
    difficulty: usize,

    /// Seed to replay (64 hex characters). Incompatible with --samples.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to sample; the one with the fewest clues wins.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    samples: usize,

    /// Print the wire-format JSON instead of grid text.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::with_difficulty(args.difficulty);

    let generated = match (args.seed, args.samples) {
        (Some(seed), 1) => generator.generate_with_seed(seed),
        (Some(_), _) => {
            eprintln!("--seed and --samples cannot be combined.");
            process::exit(2);
        }
        (None, 0) => {
            eprintln!("--samples must be at least 1.");
            process::exit(2);
        }
        (None, samples) => (0..samples)
            .into_par_iter()
            .map(|_| generator.generate())
            .try_reduce_with(|a, b| {
                Ok(if b.puzzle.clue_count() < a.puzzle.clue_count() {
                    b
                } else {
                    a
                })
            })
            .unwrap_or_else(|| {
                eprintln!("no puzzle generated.");
                process::exit(1);
            }),
    };

    match generated {
        Ok(generated) => print_generated(&generated, args.json),
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    }
}

fn print_generated(generated: &GeneratedPuzzle, json: bool) {
    if json {
        match serde_json::to_string_pretty(generated) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("serialization failed: {err}");
                process::exit(1);
            }
        }
        return;
    }

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Puzzle ({} clues):", generated.puzzle.clue_count());
    print_grid(&generated.puzzle.to_string());
    println!();
    println!("Solution:");
    print_grid(&generated.solution.to_string());
}

fn print_grid(text: &str) {
    for line in text.lines() {
        println!("  {line}");
    }
}
