//! Board position representation.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are 0-indexed, 0-8 inclusive, with row 0 at the top
/// and column 0 on the left. The 3×3 blocks are addressed through
/// [`block_row`](Self::block_row) / [`block_col`](Self::block_col) (each
/// 0-2) or the flattened [`block`](Self::block) index (0-8, row-major
/// over blocks).
///
/// # Examples
///
/// ```
/// use numplace_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.block_row(), 1);
/// assert_eq!(pos.block_col(), 2);
/// assert_eq!(pos.block(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    ///
    /// The solver relies on this ordering when scanning for the first
    /// blank cell; the generator shuffles a copy of it to randomize
    /// carving order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9, "position out of range");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the block-row index (0-2) of the containing 3×3 block.
    #[must_use]
    pub const fn block_row(self) -> u8 {
        self.row / 3
    }

    /// Returns the block-column index (0-2) of the containing 3×3 block.
    #[must_use]
    pub const fn block_col(self) -> u8 {
        self.col / 3
    }

    /// Returns the flattened block index (0-8, row-major over blocks).
    #[must_use]
    pub const fn block(self) -> u8 {
        self.block_row() * 3 + self.block_col()
    }

    /// Returns the top-left position of the containing 3×3 block.
    #[must_use]
    pub const fn block_origin(self) -> Self {
        Self {
            row: self.block_row() * 3,
            col: self.block_col() * 3,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
