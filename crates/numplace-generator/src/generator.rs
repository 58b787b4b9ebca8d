//! Seeded puzzle generation.

use numplace_core::{Digit, Grid, Position};
use numplace_solver::{SolveError, count_solutions, solve};
use rand::{Rng, seq::SliceRandom as _};
use serde::{Deserialize, Serialize};

use crate::{Hint, PuzzleSeed, hint, shuffle};

/// Generates `(puzzle, solution)` pairs with a guaranteed-unique solution.
///
/// Generation runs in three stages, all drawing from one seeded RNG:
///
/// 1. **Solved grid**: the three diagonal blocks are each filled with an
///    independent random permutation of 1-9 (they share no row or
///    column, so no validity checks are needed), and the solver
///    completes the remaining 54 cells.
/// 2. **Shuffle**: the [`shuffle`](crate::shuffle) pass randomizes the
///    completed grid without re-solving.
/// 3. **Carving**: cells are blanked in random order, keeping each
///    removal only if the puzzle still has exactly one solution.
///
/// # Examples
///
/// ```
/// use numplace_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("doc example");
/// let generated = generator.generate_with_seed(seed)?;
///
/// assert!(generated.solution.is_solved());
/// assert!(generated.puzzle.clue_count() >= 40);
/// # Ok::<(), numplace_solver::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    difficulty: usize,
}

/// A generated puzzle together with its solution and seed.
///
/// The pair is immutable once produced and upholds two invariants: the
/// puzzle is a pure blank-out of the solution, and it admits exactly one
/// completion. Serialization follows the wire format (grids as nested
/// integers 0-9, the seed as a hex string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    /// The seed that reproduces this pair.
    pub seed: PuzzleSeed,
    /// The playable grid, blanks included.
    pub puzzle: Grid,
    /// The unique completion of `puzzle`.
    pub solution: Grid,
}

impl GeneratedPuzzle {
    /// Reveals one blank puzzle cell chosen uniformly at random.
    ///
    /// Returns `None` when the puzzle has no blank cells left. Neither
    /// grid is mutated; applying the hint is up to the caller.
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Hint> {
        hint::choose_blank(&self.puzzle, &self.solution, rng)
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Default carving target: stop once at most 40 filled cells remain.
    pub const DEFAULT_DIFFICULTY: usize = 40;

    /// Creates a generator with the default difficulty.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_difficulty(Self::DEFAULT_DIFFICULTY)
    }

    /// Creates a generator that carves down toward `difficulty` clues.
    ///
    /// `difficulty` is an approximate floor, not an exact clue count:
    /// carving stops once at most `difficulty` filled cells remain, but
    /// removals that would break solution uniqueness are rejected, so
    /// the realized clue count may stay higher. Lower values produce
    /// harder puzzles and sharply longer carving times near the
    /// uniqueness frontier.
    #[must_use]
    pub const fn with_difficulty(difficulty: usize) -> Self {
        Self { difficulty }
    }

    /// Returns the carving target.
    #[must_use]
    pub const fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Propagates [`SolveError`] from the completion search. Seeded
    /// diagonal blocks always admit a completion, so this is unreachable
    /// in practice, but an internal invariant violation is reported
    /// rather than masked.
    pub fn generate(&self) -> Result<GeneratedPuzzle, SolveError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and difficulty always produce the same pair.
    ///
    /// # Errors
    ///
    /// Propagates [`SolveError`] from the completion search; see
    /// [`generate`](Self::generate).
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, SolveError> {
        let mut rng = seed.rng();
        let solution = solved_grid(&mut rng)?;
        let puzzle = carve(&solution, self.difficulty, &mut rng);
        debug_assert!(puzzle.is_blank_superset_of(&solution).is_ok());
        Ok(GeneratedPuzzle {
            seed,
            puzzle,
            solution,
        })
    }
}

/// Produces a random valid solved grid.
fn solved_grid<R: Rng + ?Sized>(rng: &mut R) -> Result<Grid, SolveError> {
    let mut grid = Grid::EMPTY;
    for block in 0..3_u8 {
        let mut digits = Digit::ALL;
        digits.shuffle(rng);
        for (i, digit) in (0_u8..).zip(digits) {
            grid.set(Position::new(block * 3 + i / 3, block * 3 + i % 3), digit);
        }
    }
    solve(&mut grid)?;
    shuffle::shuffle(&mut grid, rng);
    Ok(grid)
}

/// Blanks cells out of a copy of `solution` while the puzzle keeps a
/// unique solution.
///
/// The pool starts as all 81 positions in random order and always holds
/// exactly the currently filled cells: an accepted removal drops the
/// position from the pool, a rejected one leaves it in place and moves
/// on. Carving stops once the pool is down to `difficulty` positions or
/// every position has been tried.
fn carve<R: Rng + ?Sized>(solution: &Grid, difficulty: usize, rng: &mut R) -> Grid {
    let mut pool = Position::ALL.to_vec();
    pool.shuffle(rng);

    let mut puzzle = solution.clone();
    let mut index = 0;
    let mut rejected = 0_usize;
    while index < pool.len() && pool.len() > difficulty {
        let pos = pool[index];
        let Some(removed) = puzzle.take(pos) else {
            index += 1;
            continue;
        };
        if count_solutions(&puzzle) > 1 {
            puzzle.set(pos, removed);
            rejected += 1;
            index += 1;
        } else {
            pool.remove(index);
        }
    }
    log::debug!(
        "carved to {} clues (target {difficulty}, {rejected} removals rejected)",
        puzzle.clue_count(),
    );
    puzzle
}
