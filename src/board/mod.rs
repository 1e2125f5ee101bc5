//! Board core: tile-type registry, grid state machine, and snapshots.
//!
//! This module organizes the tile-type catalog and grid placement logic.

pub mod error;
pub mod grid;
pub mod registry;
pub mod snapshot;
pub mod types;

pub use error::*;
pub use grid::*;
pub use registry::*;
pub use snapshot::*;
pub use types::*;
