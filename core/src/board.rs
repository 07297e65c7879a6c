// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use crate::{Coord, Mark};
use serde::{Deserialize, Serialize};

/// Number of rows and columns
pub const SIZE: usize = 3;

/// Contents of one position; `None` is an empty cell
pub type Cell = Option<Mark>;

/// Represents the 3x3 board with marks and empty positions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Positions in row-major order
    positions: [Cell; SIZE * SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from rows, top to bottom
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Self {
        let mut board = Self::new();
        for coord in Coord::all() {
            board.positions[Self::coord_to_index(coord)] = rows[coord.row][coord.col];
        }
        board
    }

    /// Get the mark at the specified coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        if !coord.is_valid() {
            return None;
        }

        self.positions[Self::coord_to_index(coord)]
    }

    /// Place a mark at the specified coordinate
    pub fn place(&mut self, coord: Coord, mark: Mark) -> bool {
        if !coord.is_valid() {
            return false;
        }

        let idx = Self::coord_to_index(coord);
        if self.positions[idx].is_some() {
            return false;
        }

        self.positions[idx] = Some(mark);
        true
    }

    /// Count marks of the given player
    pub fn count(&self, mark: Mark) -> usize {
        self.positions
            .iter()
            .filter(|cell| **cell == Some(mark))
            .count()
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.positions.iter().all(Option::is_some)
    }

    /// Iterate over every position with its coordinate
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |coord| (coord, self.positions[Self::coord_to_index(coord)]))
    }

    /// Convert a coordinate to an array index
    fn coord_to_index(coord: Coord) -> usize {
        coord.row * SIZE + coord.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        assert!(board.place(Coord::new(1, 2), Mark::O));
        assert_eq!(board.get(Coord::new(1, 2)), Some(Mark::O));
        assert_eq!(board.get(Coord::new(2, 1)), None);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        assert!(board.place(Coord::new(0, 0), Mark::X));
        assert!(!board.place(Coord::new(0, 0), Mark::O));
        assert!(!board.place(Coord::new(3, 0), Mark::O));
        assert!(!board.place(Coord::new(0, 3), Mark::O));
        assert_eq!(board.get(Coord::new(0, 0)), Some(Mark::X));
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let board = Board::from_rows([
            [Some(Mark::X), None, None],
            [None, None, Some(Mark::O)],
            [None, None, None],
        ]);
        assert_eq!(board.get(Coord::new(0, 0)), Some(Mark::X));
        assert_eq!(board.get(Coord::new(1, 2)), Some(Mark::O));

        let marked: Vec<_> = board.iter().filter(|(_, c)| c.is_some()).map(|(p, _)| p).collect();
        assert_eq!(marked, vec![Coord::new(0, 0), Coord::new(1, 2)]);
    }
}
