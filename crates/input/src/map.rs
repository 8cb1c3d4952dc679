//! Key mapping from terminal events to game actions.
//!
//! The four arrows drive the piece (left, right, soft drop, rotate). Pause
//! uses one designated key, `p` unless configured otherwise.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default pause key
pub const DEFAULT_PAUSE_KEY: char = 'p';

/// Letters bound to restart and quit, matched in either case
pub const RESERVED_KEYS: [char; 2] = ['r', 'q'];

/// Whether `key` can be bound to pause without shadowing another command.
///
/// Control characters (Esc, Enter, Tab) are refused along with the reserved
/// letters; arrows never arrive as characters.
pub fn is_valid_pause_key(key: char) -> bool {
    !key.is_control() && !RESERVED_KEYS.contains(&key.to_ascii_lowercase())
}

/// Key bindings that are not fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pause: char,
}

impl KeyMap {
    /// Bind pause to `pause`; `None` if that key already has a meaning
    pub fn new(pause: char) -> Option<Self> {
        is_valid_pause_key(pause).then(|| Self {
            pause: pause.to_ascii_lowercase(),
        })
    }

    pub fn pause_key(&self) -> char {
        self.pause
    }

    /// Map keyboard input to game actions.
    pub fn action_for(&self, key: KeyEvent) -> Option<GameAction> {
        match key.code {
            KeyCode::Left => Some(GameAction::MoveLeft),
            KeyCode::Right => Some(GameAction::MoveRight),
            KeyCode::Down => Some(GameAction::SoftDrop),
            KeyCode::Up => Some(GameAction::Rotate),
            KeyCode::Char(c) if c.to_ascii_lowercase() == self.pause => Some(GameAction::Pause),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
            _ => None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            pause: DEFAULT_PAUSE_KEY,
        }
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
