/// Board configuration constants.
///
/// This module defines the default grid dimensions used by the demo.
pub const DEMO_GRID_WIDTH: usize = 6;

/// Default number of rows in the demo grid.
pub const DEMO_GRID_HEIGHT: usize = 8;
