//! Game module - active piece control, gravity, and the session lifecycle
//!
//! `Game` owns the complete session state: board, bag, progression, the
//! one active piece, and the phase machine. All mutation happens through
//! `apply_action` and `tick`, called synchronously by a single external
//! driver; there is no ambient state and nothing here blocks.

use crate::core::{Board, Progression, SevenBag, Shape};
use crate::types::{GameAction, Phase, PieceKind, BOARD_WIDTH};

/// The currently falling piece: shape matrix plus top-left anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Fresh piece at the spawn position: top row, horizontally centered
    pub fn at_spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        let x = (BOARD_WIDTH as i8 - shape.size() as i8) / 2;
        Self { kind, shape, x, y: 0 }
    }
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    bag: SevenBag,
    progression: Progression,
    phase: Phase,
    drop_counter_ms: u32,
}

impl Game {
    /// Create a session in the Ready phase with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            bag: SevenBag::new(seed),
            progression: Progression::new(),
            phase: Phase::Ready,
            drop_counter_ms: 0,
        }
    }

    /// Leave Ready, spawning the first piece
    pub fn start(&mut self) {
        if self.phase != Phase::Ready {
            return;
        }
        self.phase = Phase::Running;
        self.spawn_next();
    }

    /// Re-initialize board, bag, and progression, then spawn and run.
    /// Valid from any phase; the RNG continues from its current state.
    pub fn restart(&mut self) {
        let seed = self.bag.seed();
        self.board = Board::new();
        self.bag = SevenBag::new(seed);
        self.progression = Progression::new();
        self.active = None;
        self.drop_counter_ms = 0;
        self.phase = Phase::Running;
        self.spawn_next();
    }

    // --- queries ---

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup (tests, tooling)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    /// The kind the bag will deliver next, for the preview panel.
    /// `None` while the bag is empty (reference quirk, kept on purpose).
    pub fn next_up(&self) -> Option<PieceKind> {
        self.bag.peek_upcoming()
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn lines(&self) -> u32 {
        self.progression.lines()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    /// Current gravity interval, derived from the level (milliseconds)
    pub fn drop_interval_ms(&self) -> u32 {
        self.progression.drop_interval_ms()
    }

    // --- piece control ---

    /// Spawn a specific kind at the spawn position.
    ///
    /// Returns true when the fresh piece immediately collides with settled
    /// cells: the board is too full and the session is over.
    pub fn spawn_piece(&mut self, kind: PieceKind) -> bool {
        let piece = ActivePiece::at_spawn(kind);
        let blocked = self.board.collides(&piece.shape, piece.x, piece.y);

        // The blocked piece stays visible over the stack, as in the
        // reference behavior
        self.active = Some(piece);

        if blocked {
            self.phase = Phase::GameOver;
        }
        blocked
    }

    /// Spawn the next piece from the bag
    fn spawn_next(&mut self) {
        let kind = self.bag.next();
        self.spawn_piece(kind);
    }

    /// Shift the active piece one column; silently rejected on collision
    pub fn move_horizontal(&mut self, dir: i8) -> bool {
        debug_assert!(dir == -1 || dir == 1);
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        active.x += dir;
        if self.board.collides(&active.shape, active.x, active.y) {
            active.x -= dir;
            return false;
        }
        true
    }

    /// Move the piece down one row, locking it if it cannot descend.
    ///
    /// Shared by the manual command and the gravity tick; both reset the
    /// drop counter. Returns true if the piece actually moved.
    pub fn soft_drop(&mut self) -> bool {
        let moved = {
            let Some(active) = self.active.as_mut() else {
                return false;
            };
            active.y += 1;
            if self.board.collides(&active.shape, active.x, active.y) {
                active.y -= 1;
                false
            } else {
                true
            }
        };

        if !moved {
            self.lock_active();
        }
        self.drop_counter_ms = 0;
        moved
    }

    /// Drop the piece straight to its resting row and lock it immediately
    pub fn hard_drop(&mut self) -> bool {
        {
            let Some(active) = self.active.as_mut() else {
                return false;
            };
            while !self.board.collides(&active.shape, active.x, active.y + 1) {
                active.y += 1;
            }
        }
        self.lock_active();
        self.drop_counter_ms = 0;
        true
    }

    /// Rotate the active piece a quarter turn, with a horizontal kick
    /// search to recover from wall collisions.
    ///
    /// Offsets are applied cumulatively as +1, -2, +3, -4, ... (net
    /// displacement +1, -1, +2, -2, ...), and the search gives up once the
    /// pending positive offset exceeds the shape's width, reverting both
    /// the rotation and the anchor.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let original_x = active.x;
        active.shape.rotate(clockwise);

        let mut offset: i8 = 1;
        while self.board.collides(&active.shape, active.x, active.y) {
            active.x += offset;
            offset = -(offset + offset.signum());
            if offset > active.shape.size() as i8 {
                active.shape.rotate(!clockwise);
                active.x = original_x;
                return false;
            }
        }
        true
    }

    /// Commit the active piece, sweep full rows, update progression, and
    /// spawn the follow-up piece
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(&active.shape, active.x, active.y, active.kind);
        let cleared = self.board.sweep();
        self.progression.apply_clear(cleared);
        self.spawn_next();
    }

    // --- driving ---

    /// Advance the session clock by an elapsed-time delta.
    ///
    /// Outside Running the delta is discarded outright, so resuming from
    /// Paused never applies a stale backlog. Once the accumulated time
    /// exceeds the drop interval, gravity fires exactly one soft drop and
    /// the counter resets to zero (overshoot is not carried over).
    ///
    /// Returns true if gravity fired this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.drop_counter_ms += elapsed_ms;
        if self.drop_counter_ms > self.drop_interval_ms() {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Dispatch a discrete command from the input adapter.
    ///
    /// Piece commands are accepted only while Running; Pause toggles
    /// Running and Paused; Restart works from any phase. Returns whether
    /// the command had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Pause => match self.phase {
                Phase::Running => {
                    self.phase = Phase::Paused;
                    true
                }
                Phase::Paused => {
                    self.phase = Phase::Running;
                    true
                }
                _ => false,
            },
            _ if self.phase != Phase::Running => false,
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_HEIGHT;

    fn running_game() -> Game {
        let mut game = Game::new(12345);
        game.start();
        game
    }

    #[test]
    fn test_new_game_is_ready() {
        let game = Game::new(12345);
        assert_eq!(game.phase(), Phase::Ready);
        assert!(game.active().is_none());
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert_eq!(game.level(), 1);
        assert_eq!(game.next_up(), None);
    }

    #[test]
    fn test_start_spawns_and_runs() {
        let game = running_game();
        assert_eq!(game.phase(), Phase::Running);
        assert!(game.active().is_some());
        // The bag was drawn once, so a preview is available now
        assert!(game.next_up().is_some());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut game = running_game();
        let active = *game.active().unwrap();
        game.start();
        assert_eq!(*game.active().unwrap(), active);
    }

    #[test]
    fn test_spawn_centering() {
        // 4-wide I: (10 - 4) / 2 = 3; 2-wide O: (10 - 2) / 2 = 4
        assert_eq!(ActivePiece::at_spawn(PieceKind::I).x, 3);
        assert_eq!(ActivePiece::at_spawn(PieceKind::T).x, 3);
        assert_eq!(ActivePiece::at_spawn(PieceKind::O).x, 4);
        assert_eq!(ActivePiece::at_spawn(PieceKind::I).y, 0);
    }

    #[test]
    fn test_move_horizontal() {
        let mut game = running_game();
        let x0 = game.active().unwrap().x;

        assert!(game.move_horizontal(1));
        assert_eq!(game.active().unwrap().x, x0 + 1);
        assert!(game.move_horizontal(-1));
        assert_eq!(game.active().unwrap().x, x0);
    }

    #[test]
    fn test_move_rejected_at_wall() {
        let mut game = running_game();

        // Push hard against the left wall
        for _ in 0..12 {
            game.move_horizontal(-1);
        }
        let x = game.active().unwrap().x;
        assert!(!game.move_horizontal(-1));
        assert_eq!(game.active().unwrap().x, x);
    }

    #[test]
    fn test_soft_drop_moves_down() {
        let mut game = running_game();
        let y0 = game.active().unwrap().y;

        assert!(game.soft_drop());
        assert_eq!(game.active().unwrap().y, y0 + 1);
    }

    #[test]
    fn test_soft_drop_locks_on_floor() {
        let mut game = running_game();
        let kind = game.active().unwrap().kind;

        // Descend until the piece locks and a new one spawns at the top
        let mut locked = false;
        for _ in 0..BOARD_HEIGHT as usize + 1 {
            if !game.soft_drop() {
                locked = true;
                break;
            }
        }
        assert!(locked);
        assert_eq!(game.active().unwrap().y, 0);

        // Something of the old piece settled on the bottom region
        let settled = game.board().cells().iter().filter(|c| c.is_some()).count();
        assert_eq!(settled, 4, "locked {:?} occupies 4 cells", kind);
    }

    #[test]
    fn test_hard_drop_locks_and_respawns() {
        let mut game = running_game();

        assert!(game.hard_drop());
        assert!(game.active().is_some());
        assert_eq!(game.active().unwrap().y, 0);
        assert_eq!(
            game.board().cells().iter().filter(|c| c.is_some()).count(),
            4
        );
    }

    #[test]
    fn test_rotate_free_space() {
        let mut game = Game::new(1);
        game.start();
        game.spawn_piece(PieceKind::T);

        let mut expected = Shape::of(PieceKind::T);
        expected.rotate(true);

        assert!(game.rotate(true));
        assert_eq!(game.active().unwrap().shape, expected);
    }

    #[test]
    fn test_rotate_kick_off_left_wall() {
        let mut game = Game::new(1);
        game.start();
        game.spawn_piece(PieceKind::I);

        // Vertical I hugs the wall with its matrix overhanging it: the
        // occupied column is anchor + 2, so the anchor bottoms out at -2
        assert!(game.rotate(true));
        while game.move_horizontal(-1) {}
        assert_eq!(game.active().unwrap().x, -2);

        // Turning again needs the full row starting at the anchor; at -2
        // that pokes through the wall, so the kick search must shift right
        assert!(game.rotate(true));
        assert!(game.active().unwrap().x >= 0);
    }

    #[test]
    fn test_rotate_reverts_when_no_kick_fits() {
        let mut game = Game::new(1);
        game.start();
        game.spawn_piece(PieceKind::I);

        // Box the horizontal I in with walls of settled cells so that the
        // vertical orientation cannot fit anywhere nearby
        for y in 0..4 {
            for x in 0..10 {
                if !(3..7).contains(&x) || y != 1 {
                    game.board_mut().set(x, y, Some(PieceKind::J));
                }
            }
        }
        let before = *game.active().unwrap();
        assert!(!game.rotate(true));

        let after = *game.active().unwrap();
        assert_eq!(after.shape, before.shape);
        assert_eq!(after.x, before.x);
    }

    #[test]
    fn test_spawn_blocked_reports_game_over() {
        let mut game = running_game();

        // Fill rows 0 and 1 completely except nothing: any spawn collides
        for y in 0..2 {
            for x in 0..10 {
                game.board_mut().set(x, y, Some(PieceKind::L));
            }
        }
        assert!(game.spawn_piece(PieceKind::O));
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_game_over_blocks_commands() {
        let mut game = running_game();
        for y in 0..2 {
            for x in 0..10 {
                game.board_mut().set(x, y, Some(PieceKind::L));
            }
        }
        game.spawn_piece(PieceKind::O);
        assert_eq!(game.phase(), Phase::GameOver);

        assert!(!game.apply_action(GameAction::MoveLeft));
        assert!(!game.apply_action(GameAction::HardDrop));
        assert!(!game.apply_action(GameAction::Pause));
        assert!(!game.tick(10_000));
    }

    #[test]
    fn test_restart_resets_session() {
        let mut game = running_game();
        game.hard_drop();
        game.hard_drop();
        assert!(game.board().cells().iter().any(|c| c.is_some()));

        assert!(game.apply_action(GameAction::Restart));
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lines(), 0);
        assert_eq!(game.level(), 1);
        assert!(game.board().cells().iter().all(|c| c.is_none()));
        assert!(game.active().is_some());
    }

    #[test]
    fn test_restart_recovers_from_game_over() {
        let mut game = running_game();
        for y in 0..2 {
            for x in 0..10 {
                game.board_mut().set(x, y, Some(PieceKind::L));
            }
        }
        game.spawn_piece(PieceKind::T);
        assert_eq!(game.phase(), Phase::GameOver);

        game.apply_action(GameAction::Restart);
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_tick_accumulates_until_interval() {
        let mut game = running_game();
        let y0 = game.active().unwrap().y;

        // 1000ms interval at level 1: 62 x 16ms = 992ms, no gravity yet
        for _ in 0..62 {
            assert!(!game.tick(16));
        }
        assert_eq!(game.active().unwrap().y, y0);

        // The next tick crosses the threshold
        assert!(game.tick(16));
        assert_eq!(game.active().unwrap().y, y0 + 1);
    }

    #[test]
    fn test_tick_overshoot_is_discarded() {
        let mut game = running_game();
        let y0 = game.active().unwrap().y;

        // A huge delta still fires gravity exactly once
        assert!(game.tick(5_000));
        assert_eq!(game.active().unwrap().y, y0 + 1);

        // And the counter restarted from zero, not from the overshoot
        assert!(!game.tick(999));
        assert!(game.tick(2));
    }

    #[test]
    fn test_manual_soft_drop_resets_gravity_counter() {
        let mut game = running_game();

        game.tick(900);
        assert!(game.apply_action(GameAction::SoftDrop));

        // The shared reset means gravity needs a full interval again
        assert!(!game.tick(999));
        assert!(game.tick(2));
    }

    #[test]
    fn test_pause_freezes_clock() {
        let mut game = running_game();
        let y0 = game.active().unwrap().y;

        assert!(game.apply_action(GameAction::Pause));
        assert_eq!(game.phase(), Phase::Paused);

        // Deltas while paused are discarded entirely
        for _ in 0..100 {
            assert!(!game.tick(1_000));
        }
        assert_eq!(game.active().unwrap().y, y0);

        // Movement is rejected while paused
        assert!(!game.apply_action(GameAction::MoveLeft));

        assert!(game.apply_action(GameAction::Pause));
        assert_eq!(game.phase(), Phase::Running);
        assert!(!game.tick(999));
    }

    #[test]
    fn test_lock_clears_lines_and_scores() {
        let mut game = running_game();

        // Bottom row full except the two columns the O will fill
        for x in 0..10 {
            if !(4..6).contains(&x) {
                game.board_mut().set(x, 19, Some(PieceKind::J));
                game.board_mut().set(x, 18, Some(PieceKind::J));
            }
        }
        game.spawn_piece(PieceKind::O);
        game.hard_drop();

        // Double clear at level 1
        assert_eq!(game.lines(), 2);
        assert_eq!(game.score(), 300);
        assert!(game.board().cells().iter().all(|c| c.is_none()));
    }
}
