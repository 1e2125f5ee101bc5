//! Grid state machine: allocation, bulk fill, and validated placement.
//!
//! A `GridBoard` starts uninitialized and transitions to initialized via
//! `create_grid`, which may also be re-run later to replace the grid
//! wholesale. Every other operation requires an initialized grid. The board
//! owns its cells exclusively; the registry is passed in by the caller for
//! each operation that needs type information.

use log::info;

use crate::board::error::BoardError;
use crate::board::registry::TileRegistry;
use crate::board::snapshot::{GridSnapshot, SnapshotCell};
use crate::board::types::TileTypeId;

#[derive(Debug, Clone)]
pub struct GridBoard {
    // None until create_grid; rows indexed by y, columns by x. A populated
    // grid has no gaps: every cell holds a valid registry handle.
    grid: Option<Vec<Vec<TileTypeId>>>,
}

impl GridBoard {
    pub fn new() -> Self {
        Self { grid: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    /// Current `(width, height)`, or `None` before `create_grid`.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.grid
            .as_ref()
            .map(|rows| (rows[0].len(), rows.len()))
    }

    /// Allocate a `width x height` grid with every cell set to the empty
    /// tile. Replaces any prior grid wholesale; on failure the prior grid
    /// is left untouched.
    pub fn create_grid(
        &mut self,
        registry: &TileRegistry,
        width: usize,
        height: usize,
    ) -> Result<(), BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::InvalidDimension { width, height });
        }

        self.grid = Some(vec![vec![registry.empty_tile(); width]; height]);
        info!("[GridBoard] Grid created: {}x{}", width, height);
        Ok(())
    }

    /// Set every cell to the given type, unconditionally.
    ///
    /// Bulk overwrite semantics: unlike `place`, occupancy of the current
    /// cell contents is not consulted.
    pub fn fill(&mut self, registry: &TileRegistry, type_name: &str) -> Result<(), BoardError> {
        let rows = self.grid.as_mut().ok_or(BoardError::GridNotInitialized)?;
        let id = registry.resolve(type_name)?;

        for row in rows.iter_mut() {
            row.fill(id);
        }
        info!("[GridBoard] Grid filled with \"{}\" tiles", type_name);
        Ok(())
    }

    /// Place a tile of the given type at `(x, y)`.
    ///
    /// Validation order: bounds, then type existence, then occupancy of the
    /// tile type currently in the target cell. Exactly one cell changes on
    /// success; nothing changes on failure.
    pub fn place(
        &mut self,
        registry: &TileRegistry,
        x: usize,
        y: usize,
        type_name: &str,
    ) -> Result<(), BoardError> {
        let rows = self.grid.as_mut().ok_or(BoardError::GridNotInitialized)?;
        let height = rows.len();
        let width = rows[0].len();

        if x >= width || y >= height {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        let id = registry.resolve(type_name)?;
        if registry.type_of(rows[y][x]).is_occupied {
            return Err(BoardError::TileOccupied { x, y });
        }

        rows[y][x] = id;
        info!("[GridBoard] Placed \"{}\" at ({}, {})", type_name, x, y);
        Ok(())
    }

    /// Produce an immutable view of the grid for rendering.
    ///
    /// Cell handles are resolved to type names and display icons at capture
    /// time, so the snapshot stays valid however the board mutates later.
    pub fn snapshot(&self, registry: &TileRegistry) -> Result<GridSnapshot, BoardError> {
        let rows = self.grid.as_ref().ok_or(BoardError::GridNotInitialized)?;
        let height = rows.len();
        let width = rows[0].len();

        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            for &id in row {
                let tile_type = registry.type_of(id);
                cells.push(SnapshotCell {
                    type_name: tile_type.name.clone(),
                    icon: tile_type.display_icon.clone(),
                });
            }
        }

        Ok(GridSnapshot::new(
            width,
            height,
            registry.max_icon_width(),
            cells,
        ))
    }
}

impl Default for GridBoard {
    fn default() -> Self {
        Self::new()
    }
}
