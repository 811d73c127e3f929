//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Frame tick driven by the binary's clock (milliseconds)
pub const TICK_MS: u32 = 16;

/// Gravity timing: base interval, speed-up per level, and the floor
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_MS_PER_LEVEL: u32 = 80;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Level advances every this many cleared lines
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per simultaneous line clear (index = lines), multiplied by level
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// All seven kinds, in catalog order
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

impl PieceKind {
    /// Render color as (r, g, b)
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0x4e, 0xe3, 0xff),
            PieceKind::J => (0x4a, 0x6c, 0xff),
            PieceKind::L => (0xff, 0xb2, 0x4a),
            PieceKind::O => (0xff, 0xd2, 0x4a),
            PieceKind::S => (0x5c, 0xff, 0x7a),
            PieceKind::T => (0xc4, 0x6c, 0xff),
            PieceKind::Z => (0xff, 0x6b, 0x6b),
        }
    }

    /// One-letter name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Cell on the board (None = empty, Some = settled piece kind)
pub type Cell = Option<PieceKind>;

/// Discrete commands the engine accepts from an input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Pause,
    Restart,
}

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    Paused,
    GameOver,
}
