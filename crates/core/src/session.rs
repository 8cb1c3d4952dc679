//! Session module - the game state machine
//!
//! Ties the board, the active piece, the catalog, and the difficulty table
//! together. Every command runs to completion synchronously; the host owns the
//! fall timer and calls [`GameSession::tick`] every
//! [`GameSession::fall_interval_ms`] milliseconds.

use log::{debug, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::board::Board;
use crate::piece::{self, ActivePiece, MoveOutcome};
use crate::pieces::{random_piece, PieceShape};
use crate::rng::PieceRng;
use crate::scoring::{difficulty_for_score, line_clear_points, Difficulty};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, Level};

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    Paused,
    GameOver,
}

/// What happened on the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub points: u32,
    /// The fall interval differs from the one before the lock
    pub interval_changed: bool,
    /// The next piece could not spawn
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R = Pcg32> {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceShape,
    score: u32,
    difficulty: Difficulty,
    phase: Phase,
    /// Last lock event (consumed by hosts).
    last_event: Option<LockEvent>,
    rng: R,
}

impl GameSession<Pcg32> {
    /// Create a new game driven by a PCG generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }
}

impl<R: PieceRng> GameSession<R> {
    /// Create a new game on an empty board
    pub fn with_rng(rng: R) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Create a game over a prepared board
    ///
    /// If the first piece cannot be placed the session starts in
    /// [`Phase::GameOver`].
    pub fn with_board(board: Board, mut rng: R) -> Self {
        let current = random_piece(&mut rng);
        let next = random_piece(&mut rng);
        let mut session = Self {
            board,
            active: None,
            next,
            score: 0,
            difficulty: Difficulty::default(),
            phase: Phase::Falling,
            last_event: None,
            rng,
        };
        session.place(current);
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> Level {
        self.difficulty.level
    }

    /// Milliseconds the host should wait between ticks
    pub fn fall_interval_ms(&self) -> u32 {
        self.difficulty.fall_interval_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> PieceShape {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.grid);
        if let Some(active) = self.active {
            for (x, y) in active.cells() {
                if let Some(row) = out.grid.get_mut(y as usize) {
                    if let Some(cell) = row.get_mut(x as usize) {
                        *cell = Some(active.shape.color);
                    }
                }
            }
        }

        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.level = self.difficulty.level;
        out.fall_interval_ms = self.difficulty.fall_interval_ms;
        out.paused = self.paused();
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Gravity step. Locks the piece when it cannot fall any further.
    pub fn tick(&mut self) -> bool {
        self.step_down()
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    /// Same path as a tick, driven by the player
    pub fn soft_drop(&mut self) -> bool {
        self.step_down()
    }

    /// Turn the active piece; silently refused when it would collide
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        let turned = piece::rotate(&self.board, active);
        self.active = Some(turned);
        turned != active
    }

    /// Flip between falling and paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Falling => Phase::Paused,
            Phase::Paused => Phase::Falling,
            Phase::GameOver => return false,
        };
        debug!("phase -> {:?}", self.phase);
        true
    }

    /// Reinitialize every field, keeping only the randomizer stream
    pub fn restart(&mut self) {
        info!("restart (final score {})", self.score);

        self.board.reset();
        self.score = 0;
        self.difficulty = Difficulty::default();
        self.phase = Phase::Falling;
        self.last_event = None;
        self.active = None;

        let current = random_piece(&mut self.rng);
        self.next = random_piece(&mut self.rng);
        self.place(current);
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Active piece, but only while the game is running
    fn playable_piece(&self) -> Option<ActivePiece> {
        if self.phase != Phase::Falling {
            return None;
        }
        self.active
    }

    fn shift(&mut self, dx: i8) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        let outcome = piece::try_move(&self.board, active, dx, 0);
        self.active = Some(outcome.piece());
        outcome.moved()
    }

    fn step_down(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        match piece::try_move(&self.board, active, 0, 1) {
            MoveOutcome::Moved(moved) => {
                self.active = Some(moved);
            }
            MoveOutcome::Landed(landed) => self.lock_piece(landed),
            MoveOutcome::Blocked(_) => return false,
        }
        true
    }

    /// Merge, clear, score, re-rate difficulty, then spawn the next piece
    fn lock_piece(&mut self, landed: ActivePiece) {
        self.board.merge(&landed);
        self.active = None;

        let rows_cleared = self.board.clear_full_rows().len();
        let points = line_clear_points(rows_cleared);
        self.score = self.score.saturating_add(points);

        let previous_interval = self.difficulty.fall_interval_ms;
        self.difficulty = difficulty_for_score(self.score);

        if rows_cleared > 0 {
            debug!(
                "locked {} at ({}, {}): {} row(s), +{} -> {} ({})",
                landed.shape.kind.as_str(),
                landed.x,
                landed.y,
                rows_cleared,
                points,
                self.score,
                self.difficulty.level.label()
            );
        } else {
            debug!(
                "locked {} at ({}, {})",
                landed.shape.kind.as_str(),
                landed.x,
                landed.y
            );
        }

        let upcoming = self.next;
        let spawned = self.place(upcoming);
        if spawned {
            self.next = random_piece(&mut self.rng);
        }

        self.last_event = Some(LockEvent {
            rows_cleared: rows_cleared as u32,
            points,
            interval_changed: previous_interval != self.difficulty.fall_interval_ms,
            game_over: !spawned,
        });
    }

    /// Put `shape` at the spawn anchor, or end the game if it does not fit
    fn place(&mut self, shape: PieceShape) -> bool {
        let candidate = ActivePiece::spawn(shape);
        if candidate.is_valid(&self.board) {
            self.active = Some(candidate);
            true
        } else {
            info!(
                "game over: {} cannot spawn (score {})",
                shape.kind.as_str(),
                self.score
            );
            self.active = None;
            self.phase = Phase::GameOver;
            false
        }
    }
}

impl Default for GameSession<Pcg32> {
    fn default() -> Self {
        Self::new(1)
    }
}
