//! Backtracking search for the numplace puzzle engine.
//!
//! Two operations are exposed over a [`Grid`]:
//!
//! - [`solve`] fills every blank cell in place, or reports that the grid
//!   admits no completion.
//! - [`count_solutions`] counts completions of a grid up to an early-exit
//!   threshold, distinguishing "no solution", "unique solution", and
//!   "more than one solution" without enumerating the full solution set.
//!
//! Both walk the grid with the same depth-first search: take the first
//! blank cell in row-major order, try candidate digits 1-9 in ascending
//! order, place each valid candidate, recurse, and reset the cell before
//! trying the next candidate. The fixed cell and candidate orderings make
//! [`solve`] deterministic for a given input; randomness in generated
//! grids comes entirely from pre-seeded cells and later shuffling, not
//! from the search.
//!
//! # Examples
//!
//! ```
//! use numplace_core::Grid;
//! use numplace_solver::solve;
//!
//! let mut grid = Grid::EMPTY;
//! solve(&mut grid)?;
//! assert!(grid.is_solved());
//! # Ok::<(), numplace_solver::SolveError>(())
//! ```

use numplace_core::{Digit, Grid};

/// Error returned when a grid cannot be completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The grid admits no valid completion.
    ///
    /// The input grid is left exactly as it was passed in; a partially
    /// filled grid is never surfaced.
    #[display("grid admits no valid completion")]
    Infeasible,
}

/// Fills every blank cell of `grid` in place.
///
/// On success the grid satisfies the row/column/block invariant. Grids
/// seeded by the generator are always completable, so for those inputs
/// this cannot fail; an error indicates a corrupted caller-supplied grid.
///
/// # Errors
///
/// Returns [`SolveError::Infeasible`] if the grid admits no completion.
/// Every trial placement is undone during backtracking, so on error the
/// grid is unchanged.
pub fn solve(grid: &mut Grid) -> Result<(), SolveError> {
    if fill_first_blank(grid) {
        Ok(())
    } else {
        Err(SolveError::Infeasible)
    }
}

/// Counts the completions of `grid`, short-circuiting past one.
///
/// Returns 0, 1, or 2, where 2 means "more than one" rather than an
/// exact total: the search stops as soon as a second completion is
/// found. Full enumeration is intractable for sparse grids, and the
/// generator's carving loop only needs the three-way distinction.
///
/// The search runs on a private copy; `grid` is never mutated.
#[must_use]
pub fn count_solutions(grid: &Grid) -> usize {
    let mut scratch = grid.clone();
    count_from_first_blank(&mut scratch)
}

fn fill_first_blank(grid: &mut Grid) -> bool {
    let Some(pos) = grid.first_blank() else {
        return true;
    };
    for digit in Digit::ALL {
        if grid.is_valid_placement(pos, digit) {
            grid.set(pos, digit);
            if fill_first_blank(grid) {
                return true;
            }
            grid.take(pos);
        }
    }
    false
}

fn count_from_first_blank(grid: &mut Grid) -> usize {
    let Some(pos) = grid.first_blank() else {
        return 1;
    };
    let mut total = 0;
    for digit in Digit::ALL {
        if grid.is_valid_placement(pos, digit) {
            grid.set(pos, digit);
            total += count_from_first_blank(grid);
            grid.take(pos);
            if total > 1 {
                return total;
            }
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use numplace_core::Position;

    use super::*;

    const SOLVED: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    /// A grid where cell (0, 8) has no candidate left: 1-8 fill the rest
    /// of row 0 and 9 sits in the same block.
    fn infeasible() -> Grid {
        grid("
            123 456 78_
            ___ ___ ___
            ___ ___ __9
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ")
    }

    #[test]
    fn test_solve_empty_grid() {
        let mut grid = Grid::EMPTY;
        solve(&mut grid).unwrap();
        assert!(grid.is_solved());

        // Ascending candidate order fills the unconstrained first row
        // with 1-9 in order, and the whole run is reproducible.
        assert_eq!(grid.to_values()[0], [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let mut again = Grid::EMPTY;
        solve(&mut again).unwrap();
        assert_eq!(again, grid);
    }

    #[test]
    fn test_solve_puzzle_reaches_known_solution() {
        let mut puzzle = grid(PUZZLE);
        solve(&mut puzzle).unwrap();
        assert_eq!(puzzle, grid(SOLVED));
    }

    #[test]
    fn test_solve_solved_grid_is_a_no_op() {
        let mut solved = grid(SOLVED);
        solve(&mut solved).unwrap();
        assert_eq!(solved, grid(SOLVED));
    }

    #[test]
    fn test_solve_infeasible_grid_reports_and_restores() {
        let mut grid = infeasible();
        let before = grid.clone();
        assert_eq!(solve(&mut grid), Err(SolveError::Infeasible));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_count_solved_grid_is_unique() {
        assert_eq!(count_solutions(&grid(SOLVED)), 1);
    }

    #[test]
    fn test_count_unique_puzzle() {
        assert_eq!(count_solutions(&grid(PUZZLE)), 1);
    }

    #[test]
    fn test_count_infeasible_grid_is_zero() {
        assert_eq!(count_solutions(&infeasible()), 0);
    }

    #[test]
    fn test_count_two_interchangeable_rectangles() {
        // Blanking this rectangle leaves exactly two fillings: columns 5
        // and 8 each need {1, 3} across rows 3 and 4, and either corner
        // determines the other three.
        let mut puzzle = grid(SOLVED);
        for pos in [
            Position::new(3, 5),
            Position::new(4, 5),
            Position::new(3, 8),
            Position::new(4, 8),
        ] {
            puzzle.take(pos);
        }
        assert_eq!(count_solutions(&puzzle), 2);
    }

    #[test]
    fn test_count_caps_at_two() {
        // The empty grid has a vast number of completions; the counter
        // must stop at the second one.
        assert_eq!(count_solutions(&Grid::EMPTY), 2);
    }

    #[test]
    fn test_count_does_not_mutate_input() {
        let puzzle = grid(PUZZLE);
        let before = puzzle.clone();
        let _ = count_solutions(&puzzle);
        assert_eq!(puzzle, before);
    }
}
