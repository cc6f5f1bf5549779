//! # Board and Evaluator
//!
//! The 3x3 grid, the eight winning lines and the pure `evaluate()` function
//! that turns a board into an [`Outcome`].
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```

use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Three cell indices that win when they all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([usize; 3]);

impl Line {
    pub const fn indices(&self) -> [usize; 3] {
        self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// Rows, then columns, then diagonals. `evaluate()` reports the first match
/// in this order.
pub const LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// Nine cells in row-major order. `None` is an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([Option<Mark>; CELL_COUNT]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `index`, or `None` if the index is off the board.
    pub fn get(&self, index: usize) -> Option<Option<Mark>> {
        self.0.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(None))
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.0
    }

    /// Writes a mark without any rule checks. Only the game controller
    /// calls this, after validating the move.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.0[index] = Some(mark);
    }

    /// Returns the mark shared by all three cells of `line`, if any.
    fn line_owner(&self, line: &Line) -> Option<Mark> {
        let [a, b, c] = line.indices();
        match (self.0[a], self.0[b], self.0[c]) {
            (Some(first), Some(second), Some(third)) if first == second && second == third => {
                Some(first)
            }
            _ => None,
        }
    }
}

impl From<[Option<Mark>; CELL_COUNT]> for Board {
    fn from(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self(cells)
    }
}

/// Result of evaluating a board. Exactly one of these holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Win {
        winner: Mark,
        line: Line,
    },
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Evaluates a board: the first completed line wins, a full board without
/// one is a draw, anything else is still in progress.
pub fn evaluate(board: &Board) -> Outcome {
    for line in &LINES {
        if let Some(winner) = board.line_owner(line) {
            return Outcome::Win {
                winner,
                line: *line,
            };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    fn board_with(line: &Line, mark: Mark) -> Board {
        let mut board = Board::new();
        for index in line.indices() {
            board.place(index, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in &LINES {
            for mark in [Mark::X, Mark::O] {
                let outcome = evaluate(&board_with(line, mark));
                assert_eq!(outcome.winner(), Some(mark));
                assert_eq!(outcome.winning_line(), Some(*line));
                assert!(!outcome.is_draw());
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from([X, O, X, X, O, O, O, X, X]);
        let outcome = evaluate(&board);
        assert!(outcome.is_draw());
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.winning_line(), None);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        // Last move completes the anti-diagonal on a full board
        let board = Board::from([X, O, X, O, X, O, X, O, O]);
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert_eq!(outcome.winning_line(), Some(LINES[7]));
    }

    #[test]
    fn test_partial_board_without_line_in_progress() {
        let board = Board::from([X, O, E, E, X, E, E, E, O]);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::from([X, X, O, E, E, E, E, E, E]);
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_first_declared_line_wins() {
        // Top row and left column both complete; the row is declared first
        let board = Board::from([X, X, X, X, O, O, X, O, O]);
        assert_eq!(evaluate(&board).winning_line(), Some(LINES[0]));
    }

    #[test]
    fn test_board_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get(8), Some(None));
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty_at(9));
    }

    #[test]
    fn test_mark_opponent_and_display() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.to_string(), "X");
    }

    #[test]
    fn test_line_contains() {
        assert!(LINES[6].contains(4));
        assert!(!LINES[6].contains(2));
    }
}
