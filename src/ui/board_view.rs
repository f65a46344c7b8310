//! Board rendering for the Gobang GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Pos, Stone};

use super::theme::*;

/// What the board should show besides the stones
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardOverlay {
    /// Stone the hover preview shows; `None` disables input
    pub to_move: Option<Stone>,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Lines per side of the board last drawn
    lines: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            lines: crate::BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: BoardOverlay) -> Option<Pos> {
        let available_size = ui.available_size();
        self.lines = board.size();

        let side = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / (self.lines as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(side, side), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = overlay.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        let stone = overlay.to_move?;
        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = board.is_empty(board_pos);
        self.draw_hover_preview(&painter, board_pos, stone, is_valid);

        (response.clicked() && is_valid).then_some(board_pos)
    }

    fn grid_extent(&self) -> f32 {
        (self.lines as f32 - 1.0) * self.cell_size
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = self.grid_extent();

        for i in 0..self.lines {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + extent);
            painter.line_segment([start, end], stroke);

            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + extent, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in star_points(self.lines) {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Column letters along the top, row numbers down the left
    #[allow(clippy::cast_possible_truncation)]
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);

        for col in 0..self.lines {
            let letter = (b'A' + col as u8) as char;
            let x = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + 14.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
        }

        for row in 0..self.lines {
            let num = self.lines - row;
            let y = self.board_rect.min.y + BOARD_MARGIN + row as f32 * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + 14.0, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, num.to_string(), font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 5]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, stone: Stone, is_valid: bool) {
        let color = if is_valid {
            hover_stone(stone)
        } else {
            Some(hover_invalid())
        };
        if let Some(color) = color {
            let radius = self.cell_size * STONE_RADIUS_RATIO;
            painter.circle_filled(self.board_to_screen(pos), radius, color);
        }
    }

    /// Convert screen coordinates to board position
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor() as i32;

        let lines = self.lines as i32;
        if (0..lines).contains(&col) && (0..lines).contains(&row) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + f32::from(pos.col) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + f32::from(pos.row) * self.cell_size;
        Pos2::new(x, y)
    }
}
