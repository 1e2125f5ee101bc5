/// Tile configuration constants.
///
/// Name of the reserved empty tile type seeded into every registry. It can
/// never be re-registered or removed.
pub const EMPTY_TILE_NAME: &str = "emptyTile";

/// Display icon of the reserved empty tile type.
pub const EMPTY_TILE_ICON: &str = "-";
