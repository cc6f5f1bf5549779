use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::widgets::Block;

use crate::core::board::CELL_COUNT;
use crate::core::state::App;
use crate::core::theme::Theme;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{BoardView, ControlBar, StatusLine, TitleBar};
use crate::tui::components::board_view::{BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH};
use crate::tui::components::control_bar::RESTART_CAPTION;
use crate::tui::palette::Palette;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Cell(usize),
    Restart,
    ThemeToggle,
}

/// Screen regions for one frame. Drawing and hit testing both derive from
/// this, so clicks always match what is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub theme_button: Rect,
    pub status: Rect,
    pub board: Rect,
    pub cells: [Rect; CELL_COUNT],
    pub restart_button: Rect,
    pub hints: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, theme: Theme) -> Self {
        use Constraint::{Length, Min};
        let [title, _, status, board_region, restart_row, _, hints] = Layout::vertical([
            Length(1),
            Length(1),
            Length(1),
            Min(BOARD_HEIGHT),
            Length(1),
            Length(1),
            Length(1),
        ])
        .areas(area);

        let caption_width = TitleBar::button_caption(theme).len() as u16;
        let [_, theme_button] =
            Layout::horizontal([Min(0), Length(caption_width)]).areas(title);

        let [board_row] = Layout::vertical([Length(BOARD_HEIGHT)])
            .flex(Flex::Center)
            .areas(board_region);
        let [board] = Layout::horizontal([Length(BOARD_WIDTH)])
            .flex(Flex::Center)
            .areas(board_row);

        let [restart_button] = Layout::horizontal([Length(RESTART_CAPTION.len() as u16)])
            .flex(Flex::Center)
            .areas(restart_row);

        Self {
            title,
            theme_button,
            status,
            board,
            cells: cell_rects(board),
            restart_button,
            hints,
        }
    }

    /// Finds the control under a screen position, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if self.theme_button.contains(position) {
            return Some(HitTarget::ThemeToggle);
        }
        if self.restart_button.contains(position) {
            return Some(HitTarget::Restart);
        }
        self.cells
            .iter()
            .position(|cell| cell.contains(position))
            .map(HitTarget::Cell)
    }
}

fn cell_rects(board: Rect) -> [Rect; CELL_COUNT] {
    let rows: [Rect; 3] = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).areas(board);
    let mut cells = [Rect::default(); CELL_COUNT];
    for (row_index, row) in rows.iter().enumerate() {
        let cols: [Rect; 3] =
            Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]).areas(*row);
        for (col_index, cell) in cols.into_iter().enumerate() {
            cells[row_index * 3 + col_index] = cell;
        }
    }
    cells
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState) {
    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    let layout = ScreenLayout::new(area, app.theme);

    // Theme background behind everything
    frame.render_widget(Block::new().style(palette.base()), area);

    TitleBar::new(app.theme, palette, layout.theme_button).render(frame, layout.title);

    StatusLine::new(
        app.status_text(),
        app.game.outcome(),
        app.game.next_player(),
        palette,
    )
    .render(frame, layout.status);

    // Hide the cursor once the board no longer accepts moves
    let cursor = (!app.game.is_over()).then(|| tui.cursor.index());
    BoardView::new(
        app.game.board(),
        app.game.winning_line(),
        cursor,
        palette,
        layout.cells,
    )
    .render(frame, layout.board);

    ControlBar::new(palette, layout.restart_button, layout.hints).render(frame, area);
}
