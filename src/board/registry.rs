//! Tile-type registry.
//!
//! Owns the catalog of tile-type definitions and answers existence and
//! property queries. One registry per game session; it only ever grows, so
//! the `TileTypeId` handles it hands out stay valid for the session.

use std::collections::HashMap;

use log::info;

use crate::board::error::BoardError;
use crate::board::types::{TileType, TileTypeId};
use crate::config::tile::{EMPTY_TILE_ICON, EMPTY_TILE_NAME};

#[derive(Debug, Clone)]
pub struct TileRegistry {
    // Append-only; TileTypeId is an index into this table.
    types: Vec<TileType>,
    by_name: HashMap<String, TileTypeId>,
}

impl TileRegistry {
    /// Create a registry pre-seeded with the reserved empty tile, so a grid
    /// can always be allocated before any user-defined type exists.
    pub fn new() -> Self {
        let mut registry = Self {
            types: Vec::new(),
            by_name: HashMap::new(),
        };
        let empty = TileType::new(EMPTY_TILE_NAME, EMPTY_TILE_ICON);
        registry.insert(empty);
        registry
    }

    /// Handle of the reserved empty tile. Always the first entry.
    pub fn empty_tile(&self) -> TileTypeId {
        TileTypeId(0)
    }

    /// Register a new tile type and return its handle.
    ///
    /// Fails if the name is empty or already taken (the reserved empty-tile
    /// name counts as taken). The registry is unchanged on failure.
    pub fn register(&mut self, tile_type: TileType) -> Result<TileTypeId, BoardError> {
        if tile_type.name.is_empty() {
            return Err(BoardError::InvalidTypeName);
        }
        if self.by_name.contains_key(&tile_type.name) {
            return Err(BoardError::DuplicateType(tile_type.name));
        }

        info!("[TileRegistry] Created tile type: {}", tile_type.name);
        Ok(self.insert(tile_type))
    }

    fn insert(&mut self, tile_type: TileType) -> TileTypeId {
        let id = TileTypeId(self.types.len());
        self.by_name.insert(tile_type.name.clone(), id);
        self.types.push(tile_type);
        id
    }

    /// Look up a tile type by name.
    pub fn get(&self, name: &str) -> Result<&TileType, BoardError> {
        self.resolve(name).map(|id| self.type_of(id))
    }

    /// Resolve a name to its stable handle.
    ///
    /// This is the single place an unknown name turns into an error; grid
    /// operations resolve once and work with handles afterwards.
    pub fn resolve(&self, name: &str) -> Result<TileTypeId, BoardError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| BoardError::UnknownType(name.to_string()))
    }

    /// Whether a tile type with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Look up a tile type by handle. Handles are only minted by this
    /// registry and never invalidated, so this cannot miss.
    pub fn type_of(&self, id: TileTypeId) -> &TileType {
        &self.types[id.0]
    }

    /// Number of registered types (the empty tile included).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Always false: the empty tile is seeded at construction.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Names of all registered types, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }

    /// Widest display icon across all registered types, used by renderers
    /// to pad cells to a uniform column width.
    pub fn max_icon_width(&self) -> usize {
        self.types
            .iter()
            .map(|t| t.display_icon.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for TileRegistry {
    fn default() -> Self {
        Self::new()
    }
}
