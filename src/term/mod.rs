//! Terminal rendering module.
//!
//! Split in two so the layout stays testable: [`view`] turns engine
//! queries into a frame of styled cells, [`renderer`] owns the terminal
//! lifecycle and flushes frames to it.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{Frame, GameView, Rgb, ScreenCell};
