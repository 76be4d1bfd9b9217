//! Board coordinates.
//!
//! A [`Coordinate`] is a zero-based `(file, rank)` pair. Its canonical text
//! form is `<file-letter><rank-number>`: files are lettered from `a`, ranks
//! are numbered from 1, so `Coordinate::new(0, 0)` is `a1` and
//! `Coordinate::new(4, 9)` is `e10`.
//!
//! Parsing text into a coordinate only checks the syntax, plus that the
//! rank fits in a `u8`. Whether the coordinate lies on a particular board is
//! decided by [`BoardConfig::contains`](super::BoardConfig::contains).
//!
//! Coordinates past file `z` have no text name. They still print, as the
//! zero-based pair `(file, rank)`, so error messages never fail.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::StackError;

/// Largest number of files a text coordinate can name (`a` to `z`).
pub const MAX_FILES: u8 = 26;

const ASCII_LOWER_A: u8 = b'a';

/// A square address: zero-based file and rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Zero-based file (`a` = 0).
    pub file: u8,
    /// Zero-based rank (rank `1` = 0).
    pub rank: u8,
}

impl Coordinate {
    /// Create a coordinate from zero-based file and rank.
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Coordinate shifted by signed offsets, or `None` if either component
    /// would leave the `u8` range.
    #[must_use]
    pub fn offset(self, files: i32, ranks: i32) -> Option<Self> {
        let file = u8::try_from(i32::from(self.file) + files).ok()?;
        let rank = u8::try_from(i32::from(self.rank) + ranks).ok()?;
        Some(Self { file, rank })
    }

    /// Squared Euclidean distance in squares.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> u32 {
        let df = i32::from(self.file) - i32::from(other.file);
        let dr = i32::from(self.rank) - i32::from(other.rank);
        (df * df + dr * dr) as u32
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file < MAX_FILES {
            write!(
                f,
                "{}{}",
                (self.file + ASCII_LOWER_A) as char,
                u32::from(self.rank) + 1
            )
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

impl FromStr for Coordinate {
    type Err = StackError;

    /// Parses `<letter><number>` text, e.g. `"e4"` or `"b12"`.
    ///
    /// Well-formed text whose rank no board can hold (`"a300"`) fails with
    /// [`StackError::OutOfBounds`].
    ///
    /// ```
    /// use column_chess::core::Coordinate;
    ///
    /// let c: Coordinate = "e4".parse().unwrap();
    /// assert_eq!(c, Coordinate::new(4, 3));
    /// assert!("4e".parse::<Coordinate>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || StackError::MalformedCoordinate(s.to_string());

        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(malformed)?;
        if !letter.is_ascii_lowercase() {
            return Err(malformed());
        }

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        // All digits, so parsing only fails on overflow.
        let number: u32 = digits.parse().unwrap_or(u32::MAX);
        if number == 0 {
            return Err(malformed());
        }

        let file = letter as u8 - ASCII_LOWER_A;
        let rank = u8::try_from(number - 1).map_err(|_| StackError::OutOfBounds {
            file: i32::from(file),
            rank: i32::try_from(number - 1).unwrap_or(i32::MAX),
        })?;

        Ok(Self { file, rank })
    }
}
