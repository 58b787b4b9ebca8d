//! Single-cell hints against a stored solution.

use numplace_core::{Digit, Grid, PairMismatch, Position};
use rand::{Rng, seq::IndexedRandom as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

/// One blank puzzle cell and its solved value.
///
/// Hints are computed on demand and never stored; on the wire they are
/// `{"row": .., "col": .., "value": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The blank cell to reveal.
    pub position: Position,
    /// The solution's digit at that cell.
    pub digit: Digit,
}

/// Error returned when a caller-supplied `(puzzle, solution)` pair is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum HintError {
    /// The claimed solution is not a fully solved grid.
    #[display("solution grid is not fully solved")]
    UnsolvedSolution,
    /// The puzzle disagrees with the solution at a filled cell.
    #[display("puzzle does not match its solution: {_0}")]
    MismatchedPair(#[from] PairMismatch),
}

/// Picks a hint for a caller-supplied `(puzzle, solution)` pair.
///
/// The pair is validated first: the solution must satisfy the
/// row/column/block invariant, and the puzzle must be a pure blank-out
/// of it. A valid pair with no blank cells yields `Ok(None)`, which is a
/// normal terminal condition rather than an error. Otherwise one blank
/// cell is chosen uniformly at random. Neither grid is mutated.
///
/// # Errors
///
/// Returns [`HintError`] when the pair is rejected.
///
/// # Examples
///
/// ```
/// use numplace_generator::{PuzzleGenerator, PuzzleSeed, pick_hint};
///
/// let generated = PuzzleGenerator::new()
///     .generate_with_seed(PuzzleSeed::from_phrase("hint example"))?;
/// let mut rng = rand::rng();
///
/// let hint = pick_hint(&generated.puzzle, &generated.solution, &mut rng)?
///     .expect("a freshly generated puzzle has blank cells");
/// assert!(generated.puzzle.is_blank(hint.position));
/// assert_eq!(generated.solution.get(hint.position), Some(hint.digit));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn pick_hint<R: Rng + ?Sized>(
    puzzle: &Grid,
    solution: &Grid,
    rng: &mut R,
) -> Result<Option<Hint>, HintError> {
    if !solution.is_solved() {
        return Err(HintError::UnsolvedSolution);
    }
    puzzle.is_blank_superset_of(solution)?;
    Ok(choose_blank(puzzle, solution, rng))
}

/// Chooses a blank puzzle cell uniformly at random, skipping validation.
///
/// The caller guarantees that `solution` fills every cell `puzzle`
/// leaves blank.
pub(crate) fn choose_blank<R: Rng + ?Sized>(
    puzzle: &Grid,
    solution: &Grid,
    rng: &mut R,
) -> Option<Hint> {
    let blanks = Position::ALL
        .into_iter()
        .filter(|&position| puzzle.is_blank(position))
        .filter_map(|position| {
            solution
                .get(position)
                .map(|digit| Hint { position, digit })
        })
        .collect::<Vec<_>>();
    blanks.choose(rng).copied()
}

#[derive(Serialize, Deserialize)]
struct HintWire {
    row: u8,
    col: u8,
    value: u8,
}

impl Serialize for Hint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        HintWire {
            row: self.position.row(),
            col: self.position.col(),
            value: self.digit.value(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = HintWire::deserialize(deserializer)?;
        if wire.row > 8 || wire.col > 8 {
            return Err(D::Error::custom(format!(
                "hint position ({}, {}) out of range",
                wire.row, wire.col
            )));
        }
        let digit = Digit::try_from(wire.value).map_err(D::Error::custom)?;
        Ok(Self {
            position: Position::new(wire.row, wire.col),
            digit,
        })
    }
}

#[cfg(test)]
mod tests {
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

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(42)
    }

    #[test]
    fn test_no_blanks_means_no_hint() {
        let solution = solved();
        let hint = pick_hint(&solution, &solution, &mut rng()).unwrap();
        assert_eq!(hint, None);
    }

    #[test]
    fn test_single_blank_is_always_chosen() {
        let solution = solved();
        let mut puzzle = solution.clone();
        puzzle.take(Position::new(0, 0));

        let hint = pick_hint(&puzzle, &solution, &mut rng()).unwrap().unwrap();
        assert_eq!(hint.position, Position::new(0, 0));
        assert_eq!(hint.digit, Digit::D5);
    }

    #[test]
    fn test_hint_comes_from_a_blank_cell() {
        let solution = solved();
        let mut puzzle = solution.clone();
        for col in 0..9 {
            puzzle.take(Position::new(4, col));
        }

        let mut rng = rng();
        for _ in 0..20 {
            let hint = pick_hint(&puzzle, &solution, &mut rng).unwrap().unwrap();
            assert!(puzzle.is_blank(hint.position));
            assert_eq!(solution.get(hint.position), Some(hint.digit));
        }
    }

    #[test]
    fn test_hint_mutates_neither_grid() {
        let solution = solved();
        let mut puzzle = solution.clone();
        puzzle.take(Position::new(2, 2));
        let puzzle_before = puzzle.clone();
        let solution_before = solution.clone();

        let _ = pick_hint(&puzzle, &solution, &mut rng()).unwrap();
        assert_eq!(puzzle, puzzle_before);
        assert_eq!(solution, solution_before);
    }

    #[test]
    fn test_mismatched_pair_is_rejected() {
        let solution = solved();
        let mut puzzle = solution.clone();
        puzzle.set(Position::new(0, 0), Digit::D9);

        let err = pick_hint(&puzzle, &solution, &mut rng()).unwrap_err();
        let HintError::MismatchedPair(mismatch) = err else {
            panic!("expected a pair mismatch, got {err}");
        };
        assert_eq!(mismatch.position, Position::new(0, 0));
    }

    #[test]
    fn test_unsolved_solution_is_rejected() {
        let mut solution = solved();
        solution.take(Position::new(8, 8));
        let puzzle = solution.clone();

        let err = pick_hint(&puzzle, &solution, &mut rng()).unwrap_err();
        assert_eq!(err, HintError::UnsolvedSolution);
    }

    #[test]
    fn test_serde_wire_shape() {
        let hint = Hint {
            position: Position::new(0, 4),
            digit: Digit::D7,
        };
        let json = serde_json::to_value(hint).unwrap();
        assert_eq!(json["row"], 0);
        assert_eq!(json["col"], 4);
        assert_eq!(json["value"], 7);

        let back: Hint = serde_json::from_value(json).unwrap();
        assert_eq!(back, hint);

        let bad = serde_json::from_str::<Hint>(r#"{"row": 9, "col": 0, "value": 1}"#);
        assert!(bad.is_err());
        let bad = serde_json::from_str::<Hint>(r#"{"row": 0, "col": 0, "value": 0}"#);
        assert!(bad.is_err());
    }
}
