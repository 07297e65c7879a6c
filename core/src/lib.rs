// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tic-Tac-Toe Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - 3x3 board representation and manipulation
//! - Win and draw detection
//! - Turn management derived from the marks on the board

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use board::{Board, Cell, SIZE};

/// Player mark (X always moves first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X
    X,
    /// Player O
    O,
}

impl Mark {
    /// Returns the other player's mark
    pub fn opposite(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row, counted from the top
    pub row: usize,
    /// Column, counted from the left
    pub col: usize,
}

impl Coord {
    /// Create a new coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check if the coordinate lies on the board
    pub fn is_valid(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// All nine coordinates in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coord::new(row, col)))
    }
}

/// Outcome of the game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted
    #[default]
    InProgress,
    /// X completed a line
    XWins,
    /// O completed a line
    OWins,
    /// Board filled without a completed line
    Draw,
}

impl GameStatus {
    /// Whether moves are rejected in this status
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if any
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWins => Some(Mark::X),
            GameStatus::OWins => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Represents the current state of a tic-tac-toe game
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The current board positions
    board: Board,
    /// Recomputed by [`GameState::update_status`], never by a move
    status: GameStatus,
}

impl GameState {
    /// Create a new game: empty board, X to move
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the starting position, whatever the prior state
    pub fn initialize(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::InProgress;
        tracing::debug!("Game state initialized");
    }

    /// The board as it stands
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The mark to be placed next, derived from mark parity
    pub fn turn(&self) -> Mark {
        if self.board.count(Mark::X) == self.board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Place the current player's mark at (row, col).
    ///
    /// Out-of-range coordinates, occupied cells and moves after the game
    /// has ended are ignored. Returns whether a mark was placed.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        match self.try_apply_move(Coord::new(row, col)) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(row, col, "Move ignored: {}", e);
                false
            }
        }
    }

    /// Place the current player's mark, reporting why a move was refused
    pub fn try_apply_move(&mut self, coord: Coord) -> Result<Mark, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let mark = self.turn();
        rules::RuleValidator::new(&self.board).check_move(coord)?;
        self.board.place(coord, mark);

        tracing::trace!(row = coord.row, col = coord.col, %mark, "Mark placed");
        Ok(mark)
    }

    /// Check whether `mark` holds any complete line
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(&self.board, mark)
    }

    /// Check whether every cell is taken
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Recompute the status from the board.
    ///
    /// A terminal status is kept until [`GameState::initialize`].
    pub fn update_status(&mut self) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let status = rules::evaluate(&self.board);
        if status != self.status {
            tracing::info!(?status, "Game finished");
            self.status = status;
        }
        self.status
    }

    /// Human-readable status line
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.turn()),
            GameStatus::XWins => format!("Player {} wins!", Mark::X),
            GameStatus::OWins => format!("Player {} wins!", Mark::O),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

/// Errors that can occur when placing a mark
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("Invalid coordinate")]
    InvalidCoordinate,

    /// The cell already holds a mark
    #[error("Position already occupied")]
    OccupiedPosition,

    /// The game has already been won or drawn
    #[error("Game is over")]
    GameOver,
}
