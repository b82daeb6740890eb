//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{from_row_col, to_row_col, Board, Cell, BOARD_SIZE, TOTAL_CELLS};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked slot if any.
    ///
    /// Clicks and hover previews are only reported when `accepts_input` is
    /// set and the slot is empty.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        accepts_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(index) = last_move {
            self.draw_last_move_marker(&painter, index);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let mut clicked = None;

        if accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(index) = self.screen_to_index(pointer_pos) {
                    if board.is_empty(index) {
                        self.draw_hover_preview(&painter, index);

                        if response.clicked() {
                            clicked = Some(index);
                        }
                    }
                }
            }
        }

        clicked
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for index in 0..TOTAL_CELLS {
            match board.get(index) {
                Cell::X => self.draw_x(painter, index, Stroke::new(MARK_STROKE_WIDTH, X_COLOR)),
                Cell::O => self.draw_o(painter, index, Stroke::new(MARK_STROKE_WIDTH, O_COLOR)),
                Cell::Empty => {}
            }
        }
    }

    fn draw_x(&self, painter: &Painter, index: usize, stroke: Stroke) {
        let center = self.index_to_screen(index);
        let r = self.cell_size * MARK_RADIUS_RATIO;
        painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
        painter.line_segment([center + Vec2::new(r, -r), center + Vec2::new(-r, r)], stroke);
    }

    fn draw_o(&self, painter: &Painter, index: usize, stroke: Stroke) {
        let center = self.index_to_screen(index);
        painter.circle_stroke(center, self.cell_size * MARK_RADIUS_RATIO, stroke);
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, index: usize) {
        let center = self.index_to_screen(index) + Vec2::splat(self.cell_size * 0.38);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a stroke through the winning line
    fn draw_winning_line(&self, painter: &Painter, line: &[usize; 3]) {
        let start = self.index_to_screen(line[0]);
        let end = self.index_to_screen(line[2]);
        painter.line_segment([start, end], Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT));
    }

    /// Faint X where the human would play
    fn draw_hover_preview(&self, painter: &Painter, index: usize) {
        self.draw_x(painter, index, Stroke::new(MARK_STROKE_WIDTH, hover_preview()));
    }

    /// Convert screen coordinates to a slot index
    pub fn screen_to_index(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        if x < 0.0 || y < 0.0 {
            return None;
        }

        let (col, row) = (x.floor() as usize, y.floor() as usize);
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(from_row_col(row, col))
        } else {
            None
        }
    }

    /// Center of a slot in screen coordinates
    pub fn index_to_screen(&self, index: usize) -> Pos2 {
        let (row, col) = to_row_col(index);
        let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at_origin() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(300.0 + 2.0 * BOARD_MARGIN)),
        }
    }

    #[test]
    fn test_screen_to_index_round_trip() {
        let view = view_at_origin();
        for index in 0..TOTAL_CELLS {
            let center = view.index_to_screen(index);
            assert_eq!(view.screen_to_index(center), Some(index));
        }
    }

    #[test]
    fn test_margin_is_outside_board() {
        let view = view_at_origin();
        assert_eq!(view.screen_to_index(Pos2::new(1.0, 1.0)), None);
        assert_eq!(view.screen_to_index(Pos2::new(BOARD_MARGIN + 301.0, 50.0)), None);
    }
}
