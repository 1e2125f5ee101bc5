//! Generic 2D grid-board core for turn-based tactical games.
//!
//! The crate manages a rectangular grid of tiles, typed tile definitions,
//! and placement/occupancy rules. A caller registers tile types on a
//! [`TileRegistry`], allocates a grid on a [`GridBoard`], fills and places
//! tiles, and requests a [`GridSnapshot`] for rendering. Registry and board
//! are separate components wired together explicitly by the caller; events
//! are reported through the `log` facade, which may be a no-op.

pub mod board;
pub mod config;
pub mod demo;


pub use board::{
    BoardError, GridBoard, GridSnapshot, SnapshotCell, TileRegistry, TileType, TileTypeId,
};
