//! Core data model for the numplace puzzle engine.
//!
//! This crate defines the value types shared by the solver and the
//! generator:
//!
//! - [`Digit`]: a type-safe puzzle digit in the range 1-9
//! - [`Position`]: a `(row, col)` cell coordinate with block accessors
//! - [`Grid`]: a 9×9 board of optional digits with validity primitives
//!
//! A [`Grid`] is a plain value: mutation happens in place during search,
//! and [`Clone`] is the explicit deep copy taken whenever two independent
//! trial states must coexist (for example, preserving a solution while
//! cells are carved out of a puzzle copy).
//!
//! # Examples
//!
//! ```
//! use numplace_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::EMPTY;
//! let pos = Position::new(4, 4);
//!
//! assert!(grid.is_valid_placement(pos, Digit::D5));
//! grid.set(pos, Digit::D5);
//!
//! // The same digit is no longer valid anywhere in row 4.
//! assert!(!grid.is_valid_placement(Position::new(4, 0), Digit::D5));
//! ```

pub mod digit;
pub mod grid;
pub mod position;

pub use self::{
    digit::{Digit, DigitFromValueError},
    grid::{Grid, GridParseError, PairMismatch},
    position::Position,
};
