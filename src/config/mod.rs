/// Main configuration module.
///
/// Re-exports submodules for board and tile configuration.
pub mod board;
pub mod tile;
