//! Puzzle digit representation.

use std::fmt::{self, Display};

/// A puzzle digit in the range 1-9.
///
/// The enum rules out invalid digit values at compile time; the blank
/// state of a cell is represented separately as `Option<Digit>::None`.
///
/// # Examples
///
/// ```
/// use numplace_core::Digit;
///
/// let digit = Digit::try_from(7)?;
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
/// # Ok::<(), numplace_core::DigitFromValueError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

/// Error returned when a numeric value is not a valid digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid digit value: {value} (expected 1-9)")]
pub struct DigitFromValueError {
    /// The rejected value.
    pub value: u8,
}

impl Digit {
    /// All digits from 1 to 9, in ascending order.
    ///
    /// The solver relies on this ordering for deterministic candidate
    /// iteration.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of this digit (0-8).
    ///
    /// Useful for indexing 9-element lookup tables such as a digit
    /// relabeling map.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitFromValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::D1),
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            5 => Ok(Self::D5),
            6 => Ok(Self::D6),
            7 => Ok(Self::D7),
            8 => Ok(Self::D8),
            9 => Ok(Self::D9),
            value => Err(DigitFromValueError { value }),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_digits() {
        for digit in Digit::ALL {
            assert_eq!(Digit::try_from(digit.value()), Ok(digit));
        }
        assert_eq!(Digit::ALL.len(), 9);
        assert_eq!(Digit::ALL[0], Digit::D1);
        assert_eq!(Digit::ALL[8], Digit::D9);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert_eq!(Digit::try_from(0), Err(DigitFromValueError { value: 0 }));
        assert_eq!(Digit::try_from(10), Err(DigitFromValueError { value: 10 }));
        assert_eq!(
            Digit::try_from(0).unwrap_err().to_string(),
            "invalid digit value: 0 (expected 1-9)"
        );
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(digit.index(), i);
            assert_eq!(format!("{digit}"), format!("{}", i + 1));
        }
    }
}
