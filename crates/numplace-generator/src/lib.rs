//! Puzzle generation for the numplace engine.
//!
//! This crate turns the core grid model and the backtracking solver into
//! a puzzle factory:
//!
//! - [`PuzzleGenerator`] produces [`GeneratedPuzzle`] pairs whose puzzle
//!   grid has exactly one solution, carved down toward a configurable
//!   clue-count target.
//! - [`PuzzleSeed`] makes every run reproducible: all randomness flows
//!   from one seeded PCG generator.
//! - [`shuffle`] exposes the symmetry-preserving transformations used to
//!   randomize solved grids.
//! - [`pick_hint`] reveals a single blank cell of a `(puzzle, solution)`
//!   pair, validating caller-supplied pairs first.
//!
//! # Examples
//!
//! ```
//! use numplace_generator::PuzzleGenerator;
//!
//! let generated = PuzzleGenerator::new().generate()?;
//! assert!(generated.solution.is_solved());
//!
//! let mut rng = rand::rng();
//! let hint = generated.hint(&mut rng).expect("fresh puzzles have blanks");
//! assert_eq!(generated.solution.get(hint.position), Some(hint.digit));
//! # Ok::<(), numplace_solver::SolveError>(())
//! ```

pub mod generator;
pub mod hint;
pub mod seed;
pub mod shuffle;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator},
    hint::{Hint, HintError, pick_hint},
    seed::{PuzzleSeed, SeedParseError},
};
