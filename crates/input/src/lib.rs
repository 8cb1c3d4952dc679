//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]. The engine
//! never sees key codes; hosts translate here and call the session.

pub mod map;

pub use tetrogrid_types as types;

pub use map::{is_valid_pause_key, should_quit, KeyMap};
