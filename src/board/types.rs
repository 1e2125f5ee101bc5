use std::collections::HashMap;

use serde::{Serialize, Deserialize};

/// Stable handle to a registered tile type.
///
/// Handles are minted by `TileRegistry` when a type is registered and index
/// into its append-only type table. The registry never removes types, so a
/// handle stays valid for the whole session. Grid cells store handles, not
/// names: name lookup happens once per operation at the registry boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileTypeId(pub(crate) usize);

/// A named tile-type definition, immutable once registered.
///
/// `is_occupied` is a property of the *type*, not of a cell instance:
/// "walls are always occupied". Placement onto a cell whose current type
/// carries the flag is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileType {
    pub name: String,
    /// Short label printed by renderers for every cell of this type.
    pub display_icon: String,
    pub is_moveable: bool,
    pub is_occupied: bool,
    /// Caller-defined extension properties (game-specific data).
    pub extras: HashMap<String, serde_json::Value>,
}

impl TileType {
    /// Create a tile type with both flags cleared and no extras.
    pub fn new(name: impl Into<String>, display_icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_icon: display_icon.into(),
            is_moveable: false,
            is_occupied: false,
            extras: HashMap::new(),
        }
    }
}
