//! Read-only grid snapshots.
//!
//! A snapshot is the sole interface a renderer consumes: dimensions plus
//! resolved per-cell display data, captured at a point in time.

use serde::Serialize;

/// One cell of a snapshot, with its tile-type name and resolved icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotCell {
    pub type_name: String,
    pub icon: String,
}

/// Immutable view of grid dimensions and cell contents.
#[derive(Debug, Clone, Serialize)]
pub struct GridSnapshot {
    width: usize,
    height: usize,
    /// Widest display icon across all registered types at capture time,
    /// for renderers that pad cells to a uniform column width.
    icon_width: usize,
    // Row-major: index = y * width + x.
    cells: Vec<SnapshotCell>,
}

impl GridSnapshot {
    pub(crate) fn new(
        width: usize,
        height: usize,
        icon_width: usize,
        cells: Vec<SnapshotCell>,
    ) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            icon_width,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn icon_width(&self) -> usize {
        self.icon_width
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&SnapshotCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(&self.cells[y * self.width + x])
    }

    /// All cells in row-major order (y then x ascending).
    pub fn cells(&self) -> impl Iterator<Item = &SnapshotCell> {
        self.cells.iter()
    }

    /// Rows in decreasing `y` order, matching a bottom-left-origin grid
    /// displayed top to bottom.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[SnapshotCell]> {
        self.cells.chunks(self.width).rev()
    }
}
