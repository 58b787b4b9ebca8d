//! The 9×9 board and its validity primitives.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use crate::{Digit, Position, digit::DigitFromValueError};

/// A 9×9 board of optional digits.
///
/// `None` is a blank cell. On the wire (and in [`to_values`]) blanks are
/// the integer 0 and filled cells their digit value, so a grid serializes
/// as a 9-element sequence of 9-element sequences of integers 0-9.
///
/// Grids are value objects: they are mutated in place during search, and
/// [`Clone`] is the explicit deep copy used whenever two independent
/// trial states must coexist.
///
/// # Text format
///
/// [`Display`] renders nine rows of nine characters, using `.` for
/// blanks. [`FromStr`] accepts digits `1`-`9` for filled cells, any of
/// `.`, `_`, or `0` for blanks, and ignores whitespace:
///
/// ```
/// use numplace_core::Grid;
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
/// assert_eq!(grid.clue_count(), 30);
/// # Ok::<(), numplace_core::GridParseError>(())
/// ```
///
/// [`to_values`]: Self::to_values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Option<Digit>; 9]; 9],
}

/// Error returned when a grid string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The string contains a character that is neither a digit, a blank
    /// marker (`.`, `_`, `0`), nor whitespace.
    #[display("invalid character {character:?} in grid string")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The string does not describe exactly 81 cells.
    #[display("grid string describes {cells} cells (expected 81)")]
    WrongCellCount {
        /// The number of cells found.
        cells: usize,
    },
}

/// Error returned when a puzzle disagrees with its claimed solution.
///
/// Produced by [`Grid::is_blank_superset_of`]: a puzzle must be a pure
/// "blank-out" of its solution, so every filled puzzle cell has to match
/// the solution at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Error)]
pub struct PairMismatch {
    /// The position where the two grids disagree.
    pub position: Position,
    /// The digit the puzzle holds there.
    pub puzzle: Digit,
    /// The digit the solution holds there, if any.
    pub solution: Option<Digit>,
}

impl Display for PairMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "puzzle holds {} at {} but the solution ", self.puzzle, self.position)?;
        match self.solution {
            Some(digit) => write!(f, "holds {digit}"),
            None => write!(f, "is blank there"),
        }
    }
}

impl Grid {
    /// The all-blank grid.
    pub const EMPTY: Self = Self {
        cells: [[None; 9]; 9],
    };

    /// Returns the digit at `pos`, or `None` if the cell is blank.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    /// Places `digit` at `pos`, overwriting any previous value.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.row() as usize][pos.col() as usize] = Some(digit);
    }

    /// Blanks the cell at `pos`, returning the digit it held.
    pub const fn take(&mut self, pos: Position) -> Option<Digit> {
        self.cells[pos.row() as usize][pos.col() as usize].take()
    }

    /// Returns `true` if the cell at `pos` is blank.
    #[must_use]
    pub const fn is_blank(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns the first blank position in row-major order, if any.
    ///
    /// This ordering is what makes the solver's search deterministic for
    /// a given input grid.
    #[must_use]
    pub fn first_blank(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.is_blank(pos))
    }

    /// Returns the number of blank cells.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_blank(pos))
            .count()
    }

    /// Returns the number of filled cells (clues, in a puzzle).
    #[must_use]
    pub fn clue_count(&self) -> usize {
        81 - self.blank_count()
    }

    /// Returns whether placing `digit` at `pos` violates no constraint.
    ///
    /// Checks that no other cell in the same row, column, or 3×3 block
    /// already holds `digit`. The cell at `pos` itself is not inspected;
    /// callers only invoke this on blank cells.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: Digit) -> bool {
        let digit = Some(digit);
        for i in 0..9 {
            if self.cells[usize::from(pos.row())][i] == digit {
                return false;
            }
            if self.cells[i][usize::from(pos.col())] == digit {
                return false;
            }
        }
        let origin = pos.block_origin();
        for row in 0..3 {
            for col in 0..3 {
                let row = usize::from(origin.row() + row);
                let col = usize::from(origin.col() + col);
                if self.cells[row][col] == digit {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if every cell is filled and every row, column, and
    /// 3×3 block contains each of 1-9 exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let mut rows = [[false; 9]; 9];
        let mut cols = [[false; 9]; 9];
        let mut blocks = [[false; 9]; 9];
        for pos in Position::ALL {
            let Some(digit) = self.get(pos) else {
                return false;
            };
            let i = digit.index();
            let row = &mut rows[usize::from(pos.row())][i];
            let col = &mut cols[usize::from(pos.col())][i];
            let block = &mut blocks[usize::from(pos.block())][i];
            if *row || *col || *block {
                return false;
            }
            *row = true;
            *col = true;
            *block = true;
        }
        true
    }

    /// Checks that this grid is a pure blank-out of `solution`.
    ///
    /// Every filled cell of `self` must hold the same digit as
    /// `solution` at the same position; blanks are unconstrained.
    ///
    /// # Errors
    ///
    /// Returns [`PairMismatch`] for the first disagreeing position in
    /// row-major order.
    pub fn is_blank_superset_of(&self, solution: &Self) -> Result<(), PairMismatch> {
        for position in Position::ALL {
            let Some(puzzle) = self.get(position) else {
                continue;
            };
            if solution.get(position) != Some(puzzle) {
                return Err(PairMismatch {
                    position,
                    puzzle,
                    solution: solution.get(position),
                });
            }
        }
        Ok(())
    }

    /// Swaps two whole rows.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    pub fn swap_rows(&mut self, a: u8, b: u8) {
        self.cells.swap(a as usize, b as usize);
    }

    /// Swaps two whole columns.
    ///
    /// # Panics
    ///
    /// Panics if either index is not in the range 0-8.
    pub fn swap_cols(&mut self, a: u8, b: u8) {
        assert!(a < 9 && b < 9, "column index out of range");
        for row in &mut self.cells {
            row.swap(a as usize, b as usize);
        }
    }

    /// Returns the grid as rows of integers, 0 for blank cells.
    ///
    /// This is the wire representation used by the serde impls.
    #[must_use]
    pub fn to_values(&self) -> [[u8; 9]; 9] {
        self.cells
            .map(|row| row.map(|cell| cell.map_or(0, Digit::value)))
    }

    /// Builds a grid from rows of integers, 0 meaning blank.
    ///
    /// # Errors
    ///
    /// Returns [`DigitFromValueError`] if any cell is greater than 9.
    pub fn from_values(values: [[u8; 9]; 9]) -> Result<Self, DigitFromValueError> {
        let mut grid = Self::EMPTY;
        for (row, values) in values.into_iter().enumerate() {
            for (col, value) in values.into_iter().enumerate() {
                if value != 0 {
                    #[expect(clippy::cast_possible_truncation)]
                    let pos = Position::new(row as u8, col as u8);
                    grid.set(pos, Digit::try_from(value)?);
                }
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::EMPTY;
        let mut cells = 0_usize;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let digit = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => character
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(|value| Digit::try_from(value).ok()),
                character => return Err(GridParseError::InvalidCharacter { character }),
            };
            if cells < 81 {
                if let Some(digit) = digit {
                    grid.set(Position::ALL[cells], digit);
                }
            }
            cells += 1;
        }
        if cells != 81 {
            return Err(GridParseError::WrongCellCount { cells });
        }
        Ok(grid)
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_values().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = <[[u8; 9]; 9]>::deserialize(deserializer)?;
        Self::from_values(values).map_err(D::Error::custom)
    }
}
