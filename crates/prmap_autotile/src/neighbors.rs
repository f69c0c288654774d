//! Neighbour compatibility: which cardinal neighbours blend with a cell

use prmap_core::{Catalog, Direction, Tile, TileGrid};

/// Check whether `target` blends visually with `center`.
///
/// Two ungrouped cells (no sprite set, including empty cells) always blend.
/// Two grouped cells blend when their sheets share a style and either the
/// target's sheet mixes with its own style or both cells belong to the same
/// sprite set. A grouped cell never blends with an ungrouped one.
///
/// A tile whose sheet is missing from the catalog never blends; use
/// [`substitute_cell`](crate::substitute_cell) to have that reported as an error.
pub fn is_compatible(center: Option<&Tile>, target: Option<&Tile>, catalog: &Catalog) -> bool {
    let center_set = center.and_then(|t| catalog.find_sprite_set(t));
    let target_set = target.and_then(|t| catalog.find_sprite_set(t));

    match (center_set, target_set) {
        (None, None) => true,
        (Some(center_set), Some(target_set)) => {
            let center_sheet = center.and_then(|t| catalog.find_sheet(t));
            let target_sheet = target.and_then(|t| catalog.find_sheet(t));
            let (Some(center_sheet), Some(target_sheet)) = (center_sheet, target_sheet) else {
                return false;
            };

            let same_set =
                center_set.id == target_set.id && center_set.sheet_id == target_set.sheet_id;
            target_sheet.style == center_sheet.style
                && (target_sheet.mix_with_own_style || same_set)
        }
        _ => false,
    }
}

/// Evaluate one cardinal neighbour of `(x, y)`. Off-grid neighbours are compatible.
pub fn is_compatible_toward(
    grid: &TileGrid,
    x: u32,
    y: u32,
    direction: Direction,
    catalog: &Catalog,
) -> bool {
    let Some((_, dx, dy)) = Direction::CARDINALS
        .iter()
        .find(|(dir, _, _)| *dir == direction)
    else {
        return false;
    };

    let nx = x as i32 + dx;
    let ny = y as i32 + dy;
    if !grid.contains(nx, ny) {
        return true;
    }
    is_compatible(grid.get(x, y), grid.get_signed(nx, ny), catalog)
}

/// Cardinal directions whose neighbour is compatible with the cell at `(x, y)`.
///
/// An empty cell has no neighbours to blend with and yields the empty set.
/// Diagonal bits are never set.
pub fn compatible_directions(grid: &TileGrid, x: u32, y: u32, catalog: &Catalog) -> Direction {
    if grid.get(x, y).is_none() {
        return Direction::empty();
    }

    Direction::CARDINALS
        .iter()
        .filter(|(dir, _, _)| is_compatible_toward(grid, x, y, *dir, catalog))
        .fold(Direction::empty(), |acc, (dir, _, _)| acc | *dir)
}
