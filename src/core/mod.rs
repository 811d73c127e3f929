//! Core module - pure game logic with no external dependencies
//!
//! Everything in here is deterministic and synchronous: the same seed and
//! the same call sequence produce the same game. No I/O, no clocks, no
//! globals - the single `Game` session object owns all mutable state.
//!
//! - [`pieces`]: tetromino catalog and in-place matrix rotation
//! - [`bag`]: seedable 7-bag randomizer
//! - [`board`]: 10x20 settled grid with collision, merge, and sweep
//! - [`scoring`]: line-clear points, levels, and gravity intervals
//! - [`game`]: active piece control, the tick clock, and the phase machine

pub mod bag;
pub mod board;
pub mod game;
pub mod pieces;
pub mod scoring;

pub use bag::{SevenBag, SimpleRng};
pub use board::Board;
pub use game::{ActivePiece, Game};
pub use pieces::Shape;
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points, Progression};
