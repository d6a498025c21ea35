//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a header row with column numbers (the cursor column
//! shows a `▼` in the active player's colour), the bordered grid, then one
//! status line. A side panel with the players appears when the viewport is
//! wide enough.

use crate::core::{GameState, Player};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{MoveError, Outcome, PlayerId};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation-only state drawn alongside the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud<'a> {
    /// Column the player is pointing at.
    pub cursor: Option<usize>,
    /// One-line message under the grid (e.g. why a move was rejected).
    pub message: Option<&'a str>,
}

/// Screen geometry for a grid of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    start_x: u16,
    /// Row of the column-number header; the frame starts one row below.
    header_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    fn frame_y(&self) -> u16 {
        self.header_y.saturating_add(1)
    }

    fn status_y(&self) -> u16 {
        self.frame_y().saturating_add(self.frame_h)
    }
}

/// Grid coordinate to screen units; anything past `u16::MAX` is off screen anyway.
fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

const BOARD_BG: Rgb = Rgb::new(20, 40, 110);
const HIGHLIGHT_BG: Rgb = Rgb::new(60, 90, 170);

/// A lightweight terminal renderer for the Connect Four grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 3x1 keeps pieces roughly round with typical glyph aspect ratios.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl GameView {
    fn layout(&self, grid_width: usize, grid_height: usize, viewport: Viewport) -> Layout {
        let frame_w = to_u16(grid_width).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = to_u16(grid_height).saturating_mul(self.cell_h).saturating_add(2);
        // header + frame + status line
        let total_h = frame_h.saturating_add(2);

        Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            header_y: viewport.height.saturating_sub(total_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Map a terminal position to a grid column.
    ///
    /// Hits on the header row or anywhere inside the frame count, so a click
    /// above a column or on one of its cells selects it.
    pub fn column_at(
        &self,
        grid_width: usize,
        grid_height: usize,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<usize> {
        let layout = self.layout(grid_width, grid_height, viewport);
        let inner_x = layout.start_x.saturating_add(1);
        let bottom = layout.frame_y().saturating_add(layout.frame_h);

        if y < layout.header_y || y >= bottom || x < inner_x {
            return None;
        }
        let column = ((x - inner_x) / self.cell_w) as usize;
        (column < grid_width).then_some(column)
    }

    /// Render the game into an existing framebuffer.
    pub fn render_into_with_hud(
        &self,
        state: &GameState,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid = state.grid();
        let layout = self.layout(grid.width(), grid.height(), viewport);

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        self.draw_header(fb, state, hud.cursor, &layout);
        self.draw_border(
            fb,
            layout.start_x,
            layout.frame_y(),
            layout.frame_w,
            layout.frame_h,
            border,
        );

        let winning = state.winning_line();
        let last = state.last_move();
        for row in 0..grid.height() {
            for column in 0..grid.width() {
                match grid.get(row, column).flatten() {
                    Some(owner) => {
                        let on_line = winning
                            .map(|line| line.contains(&(row, column)))
                            .unwrap_or(false);
                        let is_last = last
                            .map(|p| p.row == row && p.column == column)
                            .unwrap_or(false);
                        let player = state.player(owner);
                        self.draw_piece(fb, &layout, row, column, player, on_line, is_last);
                    }
                    None => self.draw_empty_cell(fb, &layout, row, column),
                }
            }
        }

        self.draw_status_line(fb, state, hud.message, &layout);
        self.draw_side_panel(fb, state, viewport, &layout);

        match state.outcome() {
            Outcome::InProgress => {}
            Outcome::WonBy(winner) => {
                let text = format!("PLAYER {} WINS!", winner.number());
                self.draw_overlay_text(fb, &layout, &text);
            }
            Outcome::Tied => self.draw_overlay_text(fb, &layout, "TIE!"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        self.render_with_hud(state, &Hud::default(), viewport)
    }

    pub fn render_with_hud(
        &self,
        state: &GameState,
        hud: &Hud<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_hud(state, hud, viewport, &mut fb);
        fb
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        cursor: Option<usize>,
        layout: &Layout,
    ) {
        let label = CellStyle {
            fg: Rgb::new(150, 150, 160),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: true,
        };
        let marker = CellStyle {
            fg: player_color(state.player(state.active_player())),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };

        let cursor = cursor.filter(|_| !state.is_terminal());
        for column in 0..state.grid().width() {
            let x = self.cell_x(layout, column).saturating_add(self.cell_w / 2);
            if cursor == Some(column) {
                fb.put_char(x, layout.header_y, '▼', marker);
            } else {
                let digit = char::from_digit(((column + 1) % 10) as u32, 10).unwrap_or(' ');
                fb.put_char(x, layout.header_y, digit, label);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: &Layout, row: usize, column: usize) {
        let style = CellStyle {
            fg: Rgb::new(110, 130, 180),
            bg: BOARD_BG,
            bold: false,
            dim: true,
        };
        self.fill_cell(fb, layout, row, column, '·', style, BOARD_BG);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        row: usize,
        column: usize,
        owner: &Player,
        on_winning_line: bool,
        is_last_move: bool,
    ) {
        let bg = if on_winning_line { HIGHLIGHT_BG } else { BOARD_BG };
        let style = CellStyle {
            fg: player_color(owner),
            bg,
            bold: on_winning_line || is_last_move,
            dim: false,
        };
        self.fill_cell(fb, layout, row, column, '●', style, bg);
    }

    /// Paint one grid cell: background across the whole cell, `ch` in the middle.
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        row: usize,
        column: usize,
        ch: char,
        style: CellStyle,
        bg: Rgb,
    ) {
        let px = self.cell_x(layout, column);
        let py = layout
            .frame_y()
            .saturating_add(1)
            .saturating_add(to_u16(row).saturating_mul(self.cell_h));
        let blank = CellStyle { bg, ..CellStyle::default() };
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', blank);
        fb.put_char(
            px.saturating_add(self.cell_w / 2),
            py.saturating_add(self.cell_h / 2),
            ch,
            style,
        );
    }

    fn cell_x(&self, layout: &Layout, column: usize) -> u16 {
        layout
            .start_x
            .saturating_add(1)
            .saturating_add(to_u16(column).saturating_mul(self.cell_w))
    }

    fn draw_status_line(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        message: Option<&str>,
        layout: &Layout,
    ) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let text = match (message, state.outcome()) {
            (Some(msg), _) => msg.to_string(),
            (None, Outcome::InProgress) => {
                format!("{} to move", state.player(state.active_player()).display_name())
            }
            (None, _) => "r: new game  q: quit".to_string(),
        };
        fb.put_str_centered(layout.start_x, layout.frame_w, layout.status_y(), &text, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        layout: &Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = layout.frame_y();
        fb.put_str(panel_x, y, "PLAYERS", label);
        y = y.saturating_add(1);

        let to_move = (!state.is_terminal()).then(|| state.active_player());
        for id in PlayerId::ALL {
            let player = state.player(id);
            let piece = CellStyle {
                fg: player_color(player),
                bold: true,
                ..value
            };
            let marker = if to_move == Some(id) { '▶' } else { ' ' };
            fb.put_char(panel_x, y, marker, label);
            fb.put_char(panel_x + 2, y, '●', piece);
            fb.put_str(panel_x + 4, y, &player.display_name(), value);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &state.moves_played().to_string(), value);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let mid_y = layout.frame_y().saturating_add(layout.frame_h / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str_centered(layout.start_x, layout.frame_w, mid_y, text, style);
    }
}

/// Colour for a player's pieces: their label when it names a colour, else a
/// fixed per-seat default.
pub fn player_color(player: &Player) -> Rgb {
    Rgb::from_label(player.label()).unwrap_or(match player.id() {
        PlayerId::One => Rgb::new(240, 210, 60),
        PlayerId::Two => Rgb::new(220, 60, 60),
    })
}

/// Status-line text for a rejected move, with 1-based column numbers.
pub fn rejection_message(err: MoveError) -> String {
    match err {
        MoveError::ColumnFull { column } => format!("column {} is full, pick another", column + 1),
        MoveError::InvalidColumn { column, width } => {
            format!("there is no column {} (1-{})", column + 1, width)
        }
        MoveError::GameOver => "game over, press r for a new game".to_string(),
    }
}
