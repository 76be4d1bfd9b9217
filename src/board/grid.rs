//! The board: coordinate-indexed squares and highlight marks.
//!
//! The `Board` owns every [`Square`], created once from a [`BoardConfig`].
//! It resolves coordinates in both directions and remembers which squares
//! are highlighted so a renderer can paint them. It does not own columns or
//! pieces; squares only record which column is resident.

use im::HashMap as ImHashMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::core::{BoardConfig, ColumnId, Coordinate, StackError};

/// Highlight colour class for a marked square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// The square of the selected column.
    Selected,
    /// A square offered as a move destination.
    Destination,
    /// Renderer-defined RGBA colour.
    Custom(u32),
}

/// Coordinate-indexed collection of squares.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    squares: FxHashMap<Coordinate, Square>,
    marked: ImHashMap<Coordinate, Highlight>,
}

impl Board {
    /// Create a board with a square on every coordinate of the grid.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let squares = config
            .coordinates()
            .map(|c| (c, Square::new(c)))
            .collect();

        Self {
            config,
            squares,
            marked: ImHashMap::new(),
        }
    }

    /// Create a board that registers only the given coordinates.
    ///
    /// Lookups of unregistered in-range coordinates fail with
    /// [`StackError::UnknownSquare`]. Fails with `OutOfBounds` if a
    /// coordinate lies outside the grid.
    pub fn with_squares(
        config: BoardConfig,
        coords: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self, StackError> {
        let mut squares = FxHashMap::default();
        for c in coords {
            let c = config.checked(i32::from(c.file), i32::from(c.rank))?;
            squares.insert(c, Square::new(c));
        }

        Ok(Self {
            config,
            squares,
            marked: ImHashMap::new(),
        })
    }

    /// The grid configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // === Coordinate Resolution ===

    /// Text name of the square at zero-based `file`/`rank`, e.g. `(4, 3)` is
    /// `"e4"`.
    pub fn resolve_coordinate(&self, file: i32, rank: i32) -> Result<String, StackError> {
        self.config.checked(file, rank).map(|c| c.to_string())
    }

    /// Parse coordinate text and check it against the grid.
    ///
    /// Malformed text fails with `MalformedCoordinate`, well-formed text
    /// naming a square outside the grid with `OutOfBounds`.
    pub fn parse_coordinate(&self, text: &str) -> Result<Coordinate, StackError> {
        let c: Coordinate = text.parse()?;
        self.config.checked(i32::from(c.file), i32::from(c.rank))
    }

    // === Squares ===

    /// Look up a registered square.
    pub fn square_at(&self, coord: Coordinate) -> Result<&Square, StackError> {
        self.squares
            .get(&coord)
            .ok_or(StackError::UnknownSquare(coord))
    }

    /// Look up a square by its text name.
    pub fn square_named(&self, text: &str) -> Result<&Square, StackError> {
        let coord = self.parse_coordinate(text)?;
        self.square_at(coord)
    }

    pub(crate) fn square_mut(&mut self, coord: Coordinate) -> Result<&mut Square, StackError> {
        self.squares
            .get_mut(&coord)
            .ok_or(StackError::UnknownSquare(coord))
    }

    /// The column resident on a square, if any.
    pub fn column_at(&self, coord: Coordinate) -> Result<Option<ColumnId>, StackError> {
        self.square_at(coord).map(Square::column)
    }

    /// Check whether a coordinate has a registered square.
    #[must_use]
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.squares.contains_key(&coord)
    }

    /// Iterate all registered squares (unordered).
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.values()
    }

    /// Iterate `(coordinate, column)` for every occupied square (unordered).
    pub fn occupied(&self) -> impl Iterator<Item = (Coordinate, ColumnId)> + '_ {
        self.squares
            .values()
            .filter_map(|s| s.column().map(|c| (s.coordinate(), c)))
    }

    /// Number of registered squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Check whether the board has no squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    // === Highlighting ===

    /// Mark a square for highlighting.
    pub fn mark_square(&mut self, coord: Coordinate, highlight: Highlight) -> Result<(), StackError> {
        self.square_at(coord)?;
        self.marked.insert(coord, highlight);
        Ok(())
    }

    /// Remove every highlight.
    pub fn unmark_all(&mut self) {
        self.marked.clear();
    }

    /// The highlight on a square, if marked.
    #[must_use]
    pub fn highlight_at(&self, coord: Coordinate) -> Option<Highlight> {
        self.marked.get(&coord).copied()
    }

    /// Iterate marked squares (unordered).
    pub fn marked(&self) -> impl Iterator<Item = (Coordinate, Highlight)> + '_ {
        self.marked.iter().map(|(c, h)| (*c, *h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(BoardConfig::standard(8, 8))
    }

    #[test]
    fn test_new_registers_every_square() {
        let board = board();
        assert_eq!(board.len(), 64);
        assert!(board.squares().all(Square::is_empty));
    }

    #[test]
    fn test_resolve_coordinate() {
        let board = board();
        assert_eq!(board.resolve_coordinate(0, 0).unwrap(), "a1");
        assert_eq!(board.resolve_coordinate(4, 3).unwrap(), "e4");
        assert_eq!(
            board.resolve_coordinate(8, 0),
            Err(StackError::OutOfBounds { file: 8, rank: 0 })
        );
    }

    #[test]
    fn test_parse_coordinate_round_trip() {
        let board = board();
        for square in board.squares() {
            let text = square.coordinate().to_string();
            assert_eq!(board.parse_coordinate(&text).unwrap(), square.coordinate());
        }
    }

    #[test]
    fn test_parse_coordinate_out_of_bounds() {
        let board = board();
        assert_eq!(
            board.parse_coordinate("i1"),
            Err(StackError::OutOfBounds { file: 8, rank: 0 })
        );
        assert_eq!(
            board.parse_coordinate("a9"),
            Err(StackError::OutOfBounds { file: 0, rank: 8 })
        );
        assert_eq!(
            board.parse_coordinate("a300"),
            Err(StackError::OutOfBounds { file: 0, rank: 299 })
        );
        assert!(matches!(
            board.parse_coordinate("9a"),
            Err(StackError::MalformedCoordinate(_))
        ));
    }

    #[test]
    fn test_unknown_square() {
        let config = BoardConfig::standard(4, 4);
        let board = Board::with_squares(config, [Coordinate::new(0, 0), Coordinate::new(1, 1)]).unwrap();

        assert!(board.square_at(Coordinate::new(1, 1)).is_ok());
        assert_eq!(
            board.square_at(Coordinate::new(2, 2)).unwrap_err(),
            StackError::UnknownSquare(Coordinate::new(2, 2))
        );
    }

    #[test]
    fn test_with_squares_rejects_off_grid() {
        let config = BoardConfig::standard(4, 4);
        let result = Board::with_squares(config, [Coordinate::new(4, 0)]);
        assert!(matches!(result, Err(StackError::OutOfBounds { .. })));
    }

    #[test]
    fn test_marking() {
        let mut board = board();
        let e4 = Coordinate::new(4, 3);

        board.mark_square(e4, Highlight::Selected).unwrap();
        assert_eq!(board.highlight_at(e4), Some(Highlight::Selected));
        assert_eq!(board.marked().count(), 1);

        board.unmark_all();
        assert_eq!(board.highlight_at(e4), None);
    }
}
