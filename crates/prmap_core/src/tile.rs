//! Resolved tile values and the row-major grid that holds them

use serde::{Deserialize, Serialize};

/// A tile on a sprite sheet, identified by the sheet and its grid coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "SheetId")]
    pub sheet_id: String,
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "Y")]
    pub y: u32,
}

impl Tile {
    pub fn new(sheet_id: impl Into<String>, x: u32, y: u32) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            x,
            y,
        }
    }

    /// Same sheet, different coordinate
    pub fn with_coords(&self, x: u32, y: u32) -> Self {
        Self {
            sheet_id: self.sheet_id.clone(),
            x,
            y,
        }
    }
}

/// A width x height layer of optional tiles, stored row-major.
///
/// Empty cells are `None`; there is no sentinel tile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<Option<Tile>>,
}

impl TileGrid {
    /// Number of cells in a `width x height` grid, `None` if it does not fit in `usize`
    pub fn cell_count(width: u32, height: u32) -> Option<usize> {
        (width as usize).checked_mul(height as usize)
    }

    /// Create an all-empty grid. Returns `None` if the size overflows.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let size = Self::cell_count(width, height)?;
        Some(Self {
            width,
            height,
            cells: vec![None; size],
        })
    }

    /// An all-empty grid with the same dimensions
    pub fn cleared(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![None; self.cells.len()],
        }
    }

    /// Wrap existing row-major cells. Returns `None` if the length does not match.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Option<Tile>>) -> Option<Self> {
        if Self::cell_count(width, height) != Some(cells.len()) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Check if a (possibly negative) position lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Flat index for an in-bounds position
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Tile at a position, `None` if empty or out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[self.index(x, y)].as_ref()
    }

    /// Tile at a signed position, `None` if empty or out of bounds
    pub fn get_signed(&self, x: i32, y: i32) -> Option<&Tile> {
        if !self.contains(x, y) {
            return None;
        }
        self.get(x as u32, y as u32)
    }

    pub fn set(&mut self, x: u32, y: u32, tile: Option<Tile>) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = tile;
        }
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
