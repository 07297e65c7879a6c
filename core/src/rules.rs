// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game rules and validation logic

use crate::{board::Board, Coord, GameError, GameStatus, Mark};

/// The eight winning triples: rows, columns, then diagonals
pub const LINES: [[Coord; 3]; 8] = [
    // Rows
    [Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
    [Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)],
    [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)],
    // Columns
    [Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)],
    [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)],
    [Coord::new(0, 2), Coord::new(1, 2), Coord::new(2, 2)],
    // Diagonals
    [Coord::new(0, 0), Coord::new(1, 1), Coord::new(2, 2)],
    [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
];

/// Validates a placement against a board
pub struct RuleValidator<'a> {
    /// The board being checked
    board: &'a Board,
}

impl<'a> RuleValidator<'a> {
    /// Create a new rules validator
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Check if a mark may be placed at `coord`
    pub fn check_move(&self, coord: Coord) -> Result<(), GameError> {
        if !coord.is_valid() {
            return Err(GameError::InvalidCoordinate);
        }

        if self.board.get(coord).is_some() {
            return Err(GameError::OccupiedPosition);
        }

        Ok(())
    }
}

/// True iff some line is entirely `mark`
pub fn check_win(board: &Board, mark: Mark) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&coord| board.get(coord) == Some(mark)))
}

/// Status implied by the board alone.
///
/// X is checked before O; both cannot hold a line under alternating play.
pub fn evaluate(board: &Board) -> GameStatus {
    if check_win(board, Mark::X) {
        GameStatus::XWins
    } else if check_win(board, Mark::O) {
        GameStatus::OWins
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
