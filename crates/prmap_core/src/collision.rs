//! Directional collision flags for tiles of the collision sheet
//!
//! The table maps a local coordinate on the collision sheet to the sides
//! movement is blocked from. Coordinates not in the table are fully open.

use crate::{Direction, Tile};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Sheet whose tiles carry collision directions
pub const COLLISION_SHEET_ID: &str = "floors";

fn collision_table() -> &'static HashMap<(u32, u32), Direction> {
    static TABLE: OnceLock<HashMap<(u32, u32), Direction>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use Direction as D;
        HashMap::from([
            ((0, 0), D::NORTH | D::WEST),
            ((1, 0), D::NORTH),
            ((2, 0), D::NORTH | D::EAST),
            ((3, 0), D::NORTH | D::WEST | D::EAST),
            ((5, 0), D::NORTH | D::WEST | D::EAST | D::SOUTH),
            ((0, 1), D::WEST),
            ((1, 1), D::empty()),
            ((2, 1), D::EAST),
            ((3, 1), D::WEST | D::EAST),
            ((4, 1), D::NORTH | D::WEST | D::SOUTH),
            ((5, 1), D::NORTH | D::SOUTH),
            ((6, 1), D::NORTH | D::EAST | D::SOUTH),
            ((0, 2), D::WEST | D::SOUTH),
            ((1, 2), D::SOUTH),
            ((2, 2), D::EAST | D::SOUTH),
            ((3, 2), D::SOUTH | D::WEST | D::EAST),
        ])
    })
}

/// Blocked directions for a coordinate on the collision sheet
pub fn collision_direction_at(x: u32, y: u32) -> Direction {
    collision_table()
        .get(&(x, y))
        .copied()
        .unwrap_or_default()
}

/// Blocked directions for a tile, empty unless it sits on `collision_sheet`
pub fn collision_direction(tile: &Tile, collision_sheet: &str) -> Direction {
    if tile.sheet_id != collision_sheet {
        return Direction::empty();
    }
    collision_direction_at(tile.x, tile.y)
}

/// Collision directions for a whole layer, one entry per cell. Empty cells are open.
pub fn collision_directions(cells: &[Option<Tile>], collision_sheet: &str) -> Vec<Direction> {
    cells
        .iter()
        .map(|cell| {
            cell.as_ref()
                .map(|tile| collision_direction(tile, collision_sheet))
                .unwrap_or_default()
        })
        .collect()
}
