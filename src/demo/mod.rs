//! Demo collaborators: terminal renderer and interactive loop.
//!
//! Everything here sits outside the board core and consumes it through
//! snapshots and registry queries only.

pub mod game_loop;
pub mod render;

pub use game_loop::*;
pub use render::*;
