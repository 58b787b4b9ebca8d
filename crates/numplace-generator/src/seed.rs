//! Reproducibility handle for puzzle generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use sha2::{Digest as _, Sha256};

/// A 32-byte seed that makes a generation run reproducible.
///
/// The same seed always yields the same `(puzzle, solution)` pair: all
/// randomness in generation (diagonal-block seeding, shuffling, carving
/// order, and hint selection against a generated pair) flows from a
/// [`Pcg64`] initialized with these bytes.
///
/// Seeds render as 64 lowercase hex characters and parse back from hex,
/// so they can be logged next to a puzzle and replayed later:
///
/// ```
/// use numplace_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("rainy tuesday");
/// let replayed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(replayed, seed);
/// # Ok::<(), numplace_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

/// Error returned when a seed string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The string is not exactly 64 characters long.
    #[display("seed string has {length} characters (expected 64)")]
    WrongLength {
        /// The number of characters found.
        length: usize,
    },
    /// The string contains a non-hex character.
    #[display("invalid character {character:?} in seed string")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from a text phrase via SHA-256.
    ///
    /// Handy for memorable, shareable seeds in tests and demos.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the generator all randomness for this seed flows from.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(character) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidCharacter { character });
        }
        if s.len() != 64 {
            return Err(SeedParseError::WrongLength { length: s.len() });
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = hex_value(pair[0]) * 16 + hex_value(pair[1]);
        }
        Ok(Self(bytes))
    }
}

/// Decodes one hex digit. The caller has already validated the input.
const fn hex_value(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}

impl Serialize for PuzzleSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PuzzleSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
