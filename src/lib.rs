//! Terminal falling-block puzzle.
//!
//! The game rules live in [`core`], a pure state machine driven through
//! discrete commands and an elapsed-time tick. [`input`] and [`term`] are
//! the thin adapters the binary wires around it: key mapping in, styled
//! frames out.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
