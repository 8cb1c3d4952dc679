//! Terminal presentation for the engine.
//!
//! [`GameView`] turns a snapshot into a [`FrameBuffer`] without any I/O;
//! [`TerminalRenderer`] owns the terminal and flushes frames to it. Both are
//! host glue: the engine does not depend on them.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrogrid_core as core;
pub use tetrogrid_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
