//! GameView: composes a styled character frame from engine queries.
//!
//! Pure layout code: given a `Game`, fill a small frame of styled cells.
//! The renderer decides how to flush that frame to a terminal, which keeps
//! this module testable without any terminal at all.
//!
//! Board cells are two characters wide so the playfield is roughly square
//! in a terminal font. The side panel shows the next-piece preview and the
//! score / lines / level counters.

use crate::core::{Game, Shape};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// A single styled character on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for ScreenCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
        }
    }
}

/// Fixed-size frame of styled cells, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<ScreenCell>,
}

/// Two terminal columns per board cell
const CELL_W: u16 = 2;
/// Playfield width including the one-column borders
const FIELD_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
/// Side panel width
const PANEL_W: u16 = 16;

pub const FRAME_WIDTH: u16 = FIELD_W + 1 + PANEL_W;
pub const FRAME_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;

impl Frame {
    pub fn new() -> Self {
        Self {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
            cells: vec![ScreenCell::default(); (FRAME_WIDTH as usize) * (FRAME_HEIGHT as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<ScreenCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
    }

    fn set(&mut self, x: u16, y: u16, cell: ScreenCell) {
        if x < self.width && y < self.height {
            self.cells[(y as usize) * (self.width as usize) + (x as usize)] = cell;
        }
    }

    fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            self.set(
                x + i as u16,
                y,
                ScreenCell {
                    ch,
                    fg,
                    bg: Rgb::new(0, 0, 0),
                },
            );
        }
    }

    /// Paint one board cell (two columns) in the piece color
    fn put_block(&mut self, col: u16, row: u16, color: Rgb) {
        for dx in 0..CELL_W {
            self.set(
                1 + col * CELL_W + dx,
                1 + row,
                ScreenCell {
                    ch: ' ',
                    fg: Rgb::new(0, 0, 0),
                    bg: color,
                },
            );
        }
    }

    /// Flatten a row to plain text (for tests)
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .map(|x| self.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless view over the engine's query surface
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn render(&self, game: &Game) -> Frame {
        let mut frame = Frame::new();

        self.draw_border(&mut frame);
        self.draw_board(&mut frame, game);
        self.draw_active(&mut frame, game);
        self.draw_panel(&mut frame, game);
        self.draw_banner(&mut frame, game);

        frame
    }

    fn draw_border(&self, frame: &mut Frame) {
        let border = Rgb::new(120, 120, 120);
        for y in 0..FRAME_HEIGHT {
            let ch = if y == 0 || y == FRAME_HEIGHT - 1 {
                '+'
            } else {
                '|'
            };
            frame.put_str(0, y, &ch.to_string(), border);
            frame.put_str(FIELD_W - 1, y, &ch.to_string(), border);
        }
        for x in 1..FIELD_W - 1 {
            frame.put_str(x, 0, "-", border);
            frame.put_str(x, FRAME_HEIGHT - 1, "-", border);
        }
    }

    fn draw_board(&self, frame: &mut Frame, game: &Game) {
        let board = game.board();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                if let Some(Some(kind)) = board.get(x, y) {
                    frame.put_block(x as u16, y as u16, kind.color().into());
                }
            }
        }
    }

    fn draw_active(&self, frame: &mut Frame, game: &Game) {
        let Some(piece) = game.active() else {
            return;
        };
        let color: Rgb = piece.kind.color().into();
        for (dx, dy) in piece.shape.offsets() {
            let px = piece.x + dx;
            let py = piece.y + dy;
            // Rows overhanging the top are simply not drawn
            if px >= 0 && py >= 0 {
                frame.put_block(px as u16, py as u16, color);
            }
        }
    }

    fn draw_panel(&self, frame: &mut Frame, game: &Game) {
        let x = FIELD_W + 1;
        let label = Rgb::new(160, 160, 160);
        let value = Rgb::new(240, 240, 240);

        frame.put_str(x, 1, "NEXT", label);
        match game.next_up() {
            Some(kind) => self.draw_preview(frame, x, 2, kind),
            None => frame.put_str(x, 3, "?", label),
        }

        frame.put_str(x, 8, "SCORE", label);
        frame.put_str(x, 9, &game.score().to_string(), value);
        frame.put_str(x, 11, "LINES", label);
        frame.put_str(x, 12, &game.lines().to_string(), value);
        frame.put_str(x, 14, "LEVEL", label);
        frame.put_str(x, 15, &game.level().to_string(), value);

        frame.put_str(x, 18, "p pause  r new", label);
        frame.put_str(x, 19, "q quit", label);
    }

    fn draw_preview(&self, frame: &mut Frame, x: u16, y: u16, kind: PieceKind) {
        let shape = Shape::of(kind);
        let color: Rgb = kind.color().into();
        for (dx, dy) in shape.offsets() {
            for i in 0..CELL_W {
                frame.set(
                    x + (dx as u16) * CELL_W + i,
                    y + dy as u16,
                    ScreenCell {
                        ch: ' ',
                        fg: Rgb::new(0, 0, 0),
                        bg: color,
                    },
                );
            }
        }
    }

    fn draw_banner(&self, frame: &mut Frame, game: &Game) {
        let text = match game.phase() {
            Phase::Paused => "PAUSED",
            Phase::GameOver => "GAME OVER",
            Phase::Ready | Phase::Running => return,
        };
        let fg = Rgb::new(255, 255, 255);
        let y = FRAME_HEIGHT / 2;
        let x = (FIELD_W - text.len() as u16) / 2;
        for (i, ch) in text.chars().enumerate() {
            frame.set(
                x + i as u16,
                y,
                ScreenCell {
                    ch,
                    fg,
                    bg: Rgb::new(176, 0, 122),
                },
            );
        }
    }
}
