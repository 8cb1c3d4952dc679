//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the session state machine. It has
//! **zero dependencies** on UI, timers, or I/O:
//!
//! - **Host-driven**: the caller delivers ticks and input; nothing runs on its own
//! - **Deterministic**: randomness is injected, so a seed replays a whole game
//! - **Pull-based**: hosts read a [`GameSnapshot`] whenever they want to draw
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven-piece catalog and the quarter-turn transform
//! - [`board`]: 10x20 grid with emptiness queries, merge, and line clearing
//! - [`piece`]: the falling piece, the collision predicate, moves and rotation
//! - [`scoring`]: per-row award and the score-driven difficulty table
//! - [`rng`]: the randomizer seam
//! - [`session`]: tick/move/rotate/lock/pause/restart state machine
//! - [`snapshot`]: read-only projection for rendering
//!
//! # Game Rules
//!
//! - Pieces spawn at column 4, row 0 and fall one row per tick
//! - A piece that cannot fall locks at once (no lock delay)
//! - Rotation turns about a fixed integer center and never kicks
//! - Each cleared row is worth 100 points
//! - A piece that cannot spawn ends the game
//!
//! # Example
//!
//! ```
//! use tetrogrid_core::{GameSession, ScriptedRng};
//! use tetrogrid_types::GameAction;
//!
//! // Catalog index 1 is the vertical I piece.
//! let mut game = GameSession::with_rng(ScriptedRng::repeat(1));
//!
//! game.apply_action(GameAction::MoveRight);
//! for _ in 0..17 {
//!     game.tick();
//! }
//!
//! assert_eq!(game.board().get(5, 19), Some(Some(tetrogrid_types::Color::Cyan)));
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;

pub use tetrogrid_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use piece::{is_valid_position, rotate, try_move, ActivePiece, MoveOutcome};
pub use pieces::{piece_at, piece_count, random_piece, shape_of, PieceShape, CATALOG};
pub use rng::{PieceRng, ScriptedRng};
pub use scoring::{difficulty_for_score, line_clear_points, Difficulty};
pub use session::{GameSession, LockEvent, Phase};
pub use snapshot::{ActiveSnapshot, GameSnapshot, Grid};
