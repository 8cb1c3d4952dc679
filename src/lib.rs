//! Tetrogrid (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tetrogrid::{core,input,term,types}` and owns the host configuration.

pub mod config;

pub use tetrogrid_core as core;
pub use tetrogrid_input as input;
pub use tetrogrid_term as term;
pub use tetrogrid_types as types;
