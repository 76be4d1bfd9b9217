//! Board configuration.
//!
//! The engine never hardcodes the board size. Callers describe the grid with
//! a [`BoardConfig`] and pass it explicitly to [`Board`](crate::board::Board)
//! and to the notation codec.
//!
//! ## Notation Origin
//!
//! The rpgFEN cursor starts at the *origin*: the first playable file and the
//! top playable rank. The default arena is a 16x16 grid whose outer ring is
//! decorative, so its origin is `b15`.

use serde::{Deserialize, Serialize};

use super::coord::{Coordinate, MAX_FILES};
use super::error::StackError;

/// Grid dimensions plus the notation cursor origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of files (columns of squares), at most 26.
    pub files: u8,

    /// Number of ranks.
    pub ranks: u8,

    /// First playable file; the notation cursor returns here after every rank.
    pub origin_file: u8,

    /// Top playable rank; the notation cursor starts here.
    pub origin_rank: u8,
}

impl BoardConfig {
    /// Create a board of `files` x `ranks` whose origin is the top-left
    /// square (`a<ranks>`).
    ///
    /// Panics if the grid is empty or wider than 26 files.
    #[must_use]
    pub fn standard(files: u8, ranks: u8) -> Self {
        assert!(files > 0 && ranks > 0, "Board must have at least one square");
        assert!(files <= MAX_FILES, "At most {MAX_FILES} files supported");

        Self {
            files,
            ranks,
            origin_file: 0,
            origin_rank: ranks - 1,
        }
    }

    /// Set the notation origin (builder pattern).
    ///
    /// Panics if the origin lies outside the grid.
    #[must_use]
    pub fn with_origin(mut self, origin_file: u8, origin_rank: u8) -> Self {
        assert!(
            origin_file < self.files && origin_rank < self.ranks,
            "Origin must lie on the board"
        );
        self.origin_file = origin_file;
        self.origin_rank = origin_rank;
        self
    }

    /// The notation origin as a coordinate.
    #[must_use]
    pub const fn origin(&self) -> Coordinate {
        Coordinate::new(self.origin_file, self.origin_rank)
    }

    /// Total number of squares in the grid.
    #[must_use]
    pub const fn square_count(&self) -> usize {
        self.files as usize * self.ranks as usize
    }

    /// Check whether a coordinate lies inside the grid.
    #[must_use]
    pub const fn contains(&self, coord: Coordinate) -> bool {
        coord.file < self.files && coord.rank < self.ranks
    }

    /// Check signed file/rank indices against the grid.
    ///
    /// Returns the coordinate, or [`StackError::OutOfBounds`].
    pub fn checked(&self, file: i32, rank: i32) -> Result<Coordinate, StackError> {
        let out = || StackError::OutOfBounds { file, rank };
        let f = u8::try_from(file).map_err(|_| out())?;
        let r = u8::try_from(rank).map_err(|_| out())?;
        let coord = Coordinate::new(f, r);
        if self.contains(coord) {
            Ok(coord)
        } else {
            Err(out())
        }
    }

    /// Iterate every coordinate, top rank first, files left to right.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let files = self.files;
        (0..self.ranks)
            .rev()
            .flat_map(move |rank| (0..files).map(move |file| Coordinate::new(file, rank)))
    }
}

impl Default for BoardConfig {
    /// The 16x16 arena with a one-square decorative ring.
    fn default() -> Self {
        Self::standard(16, 16).with_origin(1, 14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_origin() {
        let config = BoardConfig::standard(8, 8);
        assert_eq!(config.origin(), Coordinate::new(0, 7));
        assert_eq!(config.square_count(), 64);
    }

    #[test]
    fn test_default_arena() {
        let config = BoardConfig::default();
        assert_eq!(config.files, 16);
        assert_eq!(config.origin().to_string(), "b15");
    }

    #[test]
    fn test_contains() {
        let config = BoardConfig::standard(8, 6);
        assert!(config.contains(Coordinate::new(7, 5)));
        assert!(!config.contains(Coordinate::new(8, 0)));
        assert!(!config.contains(Coordinate::new(0, 6)));
    }

    #[test]
    fn test_checked() {
        let config = BoardConfig::standard(8, 8);
        assert_eq!(config.checked(3, 4), Ok(Coordinate::new(3, 4)));
        assert_eq!(
            config.checked(-1, 4),
            Err(StackError::OutOfBounds { file: -1, rank: 4 })
        );
        assert_eq!(
            config.checked(0, 8),
            Err(StackError::OutOfBounds { file: 0, rank: 8 })
        );
    }

    #[test]
    fn test_coordinates_order() {
        let config = BoardConfig::standard(2, 2);
        let coords: Vec<_> = config.coordinates().map(|c| c.to_string()).collect();
        assert_eq!(coords, ["a2", "b2", "a1", "b1"]);
    }

    #[test]
    #[should_panic(expected = "Origin")]
    fn test_origin_off_board_panics() {
        let _ = BoardConfig::standard(4, 4).with_origin(4, 0);
    }
}
