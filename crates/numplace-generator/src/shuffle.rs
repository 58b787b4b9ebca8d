//! Symmetry-preserving shuffles for solved grids.
//!
//! Each transformation here maps a valid solved grid to another valid
//! solved grid: row and column swaps never cross block boundaries in a
//! way that breaks a block, and digit relabeling is a bijection applied
//! to every filled cell. The generator runs [`shuffle`] after the solver
//! completes a seeded grid, which decorrelates the output from the
//! solver's deterministic fill order.

use numplace_core::{Digit, Grid, Position};
use rand::{Rng, RngExt as _, seq::SliceRandom as _};

/// Swaps two block-rows (groups of three grid rows).
///
/// The three underlying rows are swapped one by one; the block group is
/// not moved as a single unit.
///
/// # Panics
///
/// Panics if either index is not in the range 0-2.
pub fn swap_block_rows(grid: &mut Grid, a: u8, b: u8) {
    assert!(a < 3 && b < 3, "block-row index out of range");
    for i in 0..3 {
        grid.swap_rows(a * 3 + i, b * 3 + i);
    }
}

/// Swaps two block-columns (groups of three grid columns).
///
/// # Panics
///
/// Panics if either index is not in the range 0-2.
pub fn swap_block_cols(grid: &mut Grid, a: u8, b: u8) {
    assert!(a < 3 && b < 3, "block-column index out of range");
    for i in 0..3 {
        grid.swap_cols(a * 3 + i, b * 3 + i);
    }
}

/// Swaps two rows inside one block-row.
///
/// `a` and `b` index the rows within the block-row (0-2).
///
/// # Panics
///
/// Panics if any index is not in the range 0-2.
pub fn swap_rows_in_block_row(grid: &mut Grid, block_row: u8, a: u8, b: u8) {
    assert!(block_row < 3 && a < 3 && b < 3, "row index out of range");
    grid.swap_rows(block_row * 3 + a, block_row * 3 + b);
}

/// Swaps two columns inside one block-column.
///
/// `a` and `b` index the columns within the block-column (0-2).
///
/// # Panics
///
/// Panics if any index is not in the range 0-2.
pub fn swap_cols_in_block_col(grid: &mut Grid, block_col: u8, a: u8, b: u8) {
    assert!(block_col < 3 && a < 3 && b < 3, "column index out of range");
    grid.swap_cols(block_col * 3 + a, block_col * 3 + b);
}

/// Relabels every filled cell through a digit bijection.
///
/// `map` sends digit `d` to `map[d.index()]`. Blank cells stay blank.
pub fn relabel_digits(grid: &mut Grid, map: [Digit; 9]) {
    for pos in Position::ALL {
        if let Some(digit) = grid.get(pos) {
            grid.set(pos, map[digit.index()]);
        }
    }
}

/// Applies the full randomized shuffle pass to a solved grid.
///
/// Five transformations are applied, each independently with probability
/// 1/2: a block-row swap, a block-column swap, a row swap inside each of
/// the three block-rows, a column swap inside each of the three
/// block-columns, and a uniformly random digit relabeling. Swap partners
/// are chosen uniformly without replacement.
pub fn shuffle<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    if rng.random_bool(0.5) {
        let (a, b) = distinct_pair(rng);
        swap_block_rows(grid, a, b);
    }
    if rng.random_bool(0.5) {
        let (a, b) = distinct_pair(rng);
        swap_block_cols(grid, a, b);
    }
    for block_row in 0..3 {
        if rng.random_bool(0.5) {
            let (a, b) = distinct_pair(rng);
            swap_rows_in_block_row(grid, block_row, a, b);
        }
    }
    for block_col in 0..3 {
        if rng.random_bool(0.5) {
            let (a, b) = distinct_pair(rng);
            swap_cols_in_block_col(grid, block_col, a, b);
        }
    }
    if rng.random_bool(0.5) {
        let mut map = Digit::ALL;
        map.shuffle(rng);
        relabel_digits(grid, map);
    }
}

/// Picks two distinct indices in 0-2, uniformly.
fn distinct_pair<R: Rng + ?Sized>(rng: &mut R) -> (u8, u8) {
    let a = rng.random_range(0..3_u8);
    let b = (a + rng.random_range(1..3_u8)) % 3;
    (a, b)
}

#[cfg(test)]
mod tests {
    use numplace_core::Position;
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

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

    fn solved() -> Grid {
        SOLVED.parse().unwrap()
    }

    #[test]
    fn test_block_row_swap_moves_underlying_rows() {
        let mut grid = solved();
        swap_block_rows(&mut grid, 0, 2);
        let values = grid.to_values();
        let original = solved().to_values();
        assert_eq!(values[0], original[6]);
        assert_eq!(values[1], original[7]);
        assert_eq!(values[2], original[8]);
        assert_eq!(values[3], original[3]);
        assert!(grid.is_solved());
    }

    #[test]
    fn test_block_col_swap_preserves_validity() {
        let mut grid = solved();
        swap_block_cols(&mut grid, 0, 1);
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D6));
        assert!(grid.is_solved());
    }

    #[test]
    fn test_in_block_swaps_preserve_validity() {
        let mut grid = solved();
        swap_rows_in_block_row(&mut grid, 1, 0, 2);
        assert!(grid.is_solved());
        swap_cols_in_block_col(&mut grid, 2, 1, 2);
        assert!(grid.is_solved());
    }

    #[test]
    fn test_relabel_is_a_bijection_pass() {
        let mut grid = solved();
        // Reverse relabeling: 1<->9, 2<->8, ...
        let mut map = Digit::ALL;
        map.reverse();
        relabel_digits(&mut grid, map);
        assert!(grid.is_solved());
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(0, 1)), Some(Digit::D7));
    }

    #[test]
    fn test_relabel_keeps_blanks_blank() {
        let mut grid = solved();
        grid.take(Position::new(4, 4));
        let mut map = Digit::ALL;
        map.reverse();
        relabel_digits(&mut grid, map);
        assert!(grid.is_blank(Position::new(4, 4)));
        assert_eq!(grid.blank_count(), 1);
    }

    #[test]
    fn test_distinct_pair_is_distinct() {
        let mut rng = Pcg64::seed_from_u64(7);
        for _ in 0..100 {
            let (a, b) = distinct_pair(&mut rng);
            assert!(a < 3 && b < 3 && a != b);
        }
    }

    proptest! {
        #[test]
        fn prop_shuffle_preserves_validity(seed in any::<u64>()) {
            let mut rng = Pcg64::seed_from_u64(seed);
            let mut grid = solved();
            shuffle(&mut grid, &mut rng);
            prop_assert!(grid.is_solved());
        }

        #[test]
        fn prop_repeated_shuffles_preserve_validity(seed in any::<u64>()) {
            let mut rng = Pcg64::seed_from_u64(seed);
            let mut grid = solved();
            for _ in 0..5 {
                shuffle(&mut grid, &mut rng);
            }
            prop_assert!(grid.is_solved());
        }
    }
}
