//! # Board Components
//!
//! `BoardView` draws the 3x3 grid; `BoardCursor` is the keyboard selection
//! that lives across frames in `TuiState`.
//!
//! Each cell is a bordered box with the mark centered:
//!
//! ```text
//! ┌─────┐┌─────┐┌─────┐
//! │  X  ││     ││  O  │
//! └─────┘└─────┘└─────┘
//! ```
//!
//! Cells of the winning line are drawn in the accent color. The cursor cell
//! gets a reversed border.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::board::{Board, CELL_COUNT, Line};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// Width and height of one cell, borders included.
pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Keyboard selection on the grid. Starts in the center and clamps at the
/// edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    pub row: usize,
    pub col: usize,
}

impl Default for BoardCursor {
    fn default() -> Self {
        Self { row: 1, col: 1 }
    }
}

impl BoardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }

    /// Moves the cursor onto `index`, e.g. after a mouse click.
    pub fn jump_to(&mut self, index: usize) {
        if index < CELL_COUNT {
            self.row = index / 3;
            self.col = index % 3;
        }
    }
}

/// Events emitted by the board cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Select(usize),
}

impl EventHandler for BoardCursor {
    type Event = BoardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<BoardEvent> {
        match event {
            TuiEvent::CursorUp => self.row = self.row.saturating_sub(1),
            TuiEvent::CursorDown => self.row = (self.row + 1).min(2),
            TuiEvent::CursorLeft => self.col = self.col.saturating_sub(1),
            TuiEvent::CursorRight => self.col = (self.col + 1).min(2),
            TuiEvent::Select => return Some(BoardEvent::Select(self.index())),
            TuiEvent::PlaceAt(index) => {
                self.jump_to(*index);
                return Some(BoardEvent::Select(*index));
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper, built each frame from the current game.
pub struct BoardView<'a> {
    board: &'a Board,
    winning_line: Option<Line>,
    cursor: Option<usize>,
    palette: Palette,
    cells: [Rect; CELL_COUNT],
}

impl<'a> BoardView<'a> {
    pub fn new(
        board: &'a Board,
        winning_line: Option<Line>,
        cursor: Option<usize>,
        palette: Palette,
        cells: [Rect; CELL_COUNT],
    ) -> Self {
        Self {
            board,
            winning_line,
            cursor,
            palette,
            cells,
        }
    }

    fn is_winning(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(index))
    }

    fn cell_styles(&self, index: usize) -> (Style, Style) {
        let mark_style = match self.board.cells()[index] {
            Some(_) if self.is_winning(index) => self.palette.highlight(),
            Some(mark) => self.palette.mark(mark),
            None => self.palette.base(),
        };
        let mut border_style = if self.is_winning(index) {
            self.palette.highlight()
        } else {
            self.palette.base().fg(self.palette.border)
        };
        if self.cursor == Some(index) {
            border_style = border_style
                .fg(self.palette.foreground)
                .add_modifier(Modifier::REVERSED);
        }
        (mark_style, border_style)
    }
}

impl Component for BoardView<'_> {
    fn render(&mut self, frame: &mut Frame, _area: Rect) {
        for (index, cell) in self.board.cells().iter().enumerate() {
            let (mark_style, border_style) = self.cell_styles(index);
            let symbol = cell.map(|mark| mark.symbol()).unwrap_or(" ");
            let paragraph = Paragraph::new(symbol)
                .style(mark_style)
                .alignment(Alignment::Center)
                .block(Block::bordered().border_style(border_style));
            frame.render_widget(paragraph, self.cells[index]);
        }
    }
}
