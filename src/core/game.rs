//! # Game State Controller
//!
//! Owns one game: the board, whose turn it is, the evaluated outcome and the
//! pre-move history. Two operations change it: [`GameState::apply_move`] and
//! [`GameState::reset`].
//!
//! ```text
//!              apply_move (win/draw)
//!  InProgress ──────────────────────▶ Over
//!      ▲  │                             │
//!      │  └── apply_move / reset ──┐    │
//!      │                           │    │
//!      └───────────── reset ◀──────┴────┘
//! ```
//!
//! Invalid moves never fail loudly: they return a [`MoveRejected`] reason and
//! leave the state untouched.

use std::fmt;

use crate::core::board::{evaluate, Board, Line, Mark, Outcome, CELL_COUNT};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejected {
    OutOfRange(usize),
    Occupied(usize),
    GameOver,
}

impl fmt::Display for MoveRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejected::OutOfRange(index) => write!(f, "cell {index} is off the board"),
            MoveRejected::Occupied(index) => write!(f, "cell {index} is already taken"),
            MoveRejected::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for MoveRejected {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    next_player: Mark,
    outcome: Outcome,
    /// Board snapshots taken before each accepted move. Nothing reads these
    /// back yet.
    history: Vec<Board>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next_player: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Mark {
        self.next_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.outcome.winning_line()
    }

    pub fn is_draw(&self) -> bool {
        self.outcome.is_draw()
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Places the current player's mark at `index`.
    ///
    /// Rejected when the index is off the board, the cell is taken, or the
    /// game has ended. A rejected move changes nothing, including the turn.
    /// The turn flips after every accepted move, the final one included.
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, MoveRejected> {
        if self.is_over() {
            return Err(MoveRejected::GameOver);
        }
        if index >= CELL_COUNT {
            return Err(MoveRejected::OutOfRange(index));
        }
        if !self.board.is_empty_at(index) {
            return Err(MoveRejected::Occupied(index));
        }

        self.history.push(self.board);
        self.board.place(index, self.next_player);
        self.outcome = evaluate(&self.board);
        self.next_player = self.next_player.opponent();
        Ok(self.outcome)
    }

    /// Back to an empty board with X to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
