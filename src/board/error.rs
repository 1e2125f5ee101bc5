//! Centralized error taxonomy for registry and grid operations.
//!
//! All failures are reported synchronously to the caller as `Result` values;
//! these are usage errors, not transient faults, so there is no retry or
//! recovery inside the core. Every mutating operation validates fully before
//! touching state, so a returned error means nothing was changed.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Grid dimensions must both be at least 1.
    #[error("grid sizes must be positive integers, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Tile-type names must be non-empty.
    #[error("tile type name must be a non-empty string")]
    InvalidTypeName,

    /// Registering a name that already exists in the registry.
    #[error("tile type \"{0}\" already exists")]
    DuplicateType(String),

    /// Referencing a name absent from the registry.
    #[error("tile type \"{0}\" does not exist")]
    UnknownType(String),

    /// A grid operation was attempted before `create_grid`.
    #[error("grid not initialized, call create_grid first")]
    GridNotInitialized,

    /// Coordinates outside the current grid dimensions.
    #[error("invalid coordinates ({x}, {y}) for a {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// The target cell's current tile type is marked occupied.
    #[error("tile at ({x}, {y}) is already occupied")]
    TileOccupied { x: usize, y: usize },
}
