//! Scoring module - line-clear points, level derivation, gravity speed
//!
//! Fixed classic table: 0/100/300/500/800 points for 0-4 simultaneous
//! lines, multiplied by the level in effect when the clear happened. The
//! level is recomputed from the running line total only after the award,
//! so a clear that crosses a level boundary still pays out at the old
//! level.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_MS_PER_LEVEL, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows at `level`
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    let base = LINE_SCORES.get(lines).copied().unwrap_or(0);
    base * level
}

/// Level derived from total cleared lines (starts at 1)
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, clamped at the floor (milliseconds)
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_sub(1) * DROP_MS_PER_LEVEL)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Score, line count, and derived level for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    score: u32,
    lines: u32,
    level: u32,
}

impl Progression {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity interval (milliseconds)
    pub fn drop_interval_ms(&self) -> u32 {
        drop_interval_ms(self.level)
    }

    /// Record a lock event with `cleared` full rows removed.
    ///
    /// Points are awarded at the pre-clear level; the level is recomputed
    /// afterwards from the new line total.
    pub fn apply_clear(&mut self, cleared: usize) {
        if cleared == 0 {
            return;
        }
        self.score = self.score.saturating_add(line_clear_points(cleared, self.level));
        self.lines += cleared as u32;
        self.level = level_for_lines(self.lines);
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
