//! Style substitution: swap representative tiles for their neighbour-aware variant
//!
//! Every function here reads from an immutable source grid and builds a
//! separate output grid, so a substituted cell is never seen by a later
//! neighbour lookup.

use crate::neighbors::compatible_directions;
use crate::StyleError;
use prmap_core::{Catalog, Direction, Tile, TileGrid};
use rayon::prelude::*;

/// Compute the output tile for one cell of `source`.
///
/// The source tile passes through unchanged when the cell is empty, has no
/// sprite set, sits on a sheet without a style table, or is not the set's
/// representative variant. Otherwise the neighbour mask picks a style name from
/// the sheet and the style name picks a location from the set.
///
/// A tile on a sheet missing from the catalog is an error, for the cell itself
/// and for any neighbour consulted for the mask.
pub fn substitute_cell(
    source: &TileGrid,
    x: u32,
    y: u32,
    catalog: &Catalog,
) -> Result<Option<Tile>, StyleError> {
    let Some(tile) = source.get(x, y) else {
        return Ok(None);
    };
    let sheet = catalog
        .find_sheet(tile)
        .ok_or_else(|| StyleError::SheetNotFound {
            x,
            y,
            sheet: tile.sheet_id.clone(),
        })?;
    let Some(set) = catalog.find_sprite_set(tile) else {
        return Ok(Some(tile.clone()));
    };
    if !sheet.has_style_table() || !set.is_representative_at(tile.x, tile.y) {
        return Ok(Some(tile.clone()));
    }

    check_neighbour_sheets(source, x, y, catalog)?;
    let directions = compatible_directions(source, x, y, catalog);
    let style = sheet
        .style_for(directions)
        .ok_or_else(|| StyleError::StyleVariantUndefined {
            x,
            y,
            sheet: sheet.id.clone(),
            directions,
        })?;
    let location = set
        .tile_for_style(style)
        .ok_or_else(|| StyleError::StyleTileUndefined {
            x,
            y,
            set: set.id.clone(),
            style: style.to_string(),
        })?;

    Ok(Some(tile.with_coords(location.x, location.y)))
}

/// Every cardinal neighbour of `(x, y)` must sit on a catalog sheet
fn check_neighbour_sheets(
    source: &TileGrid,
    x: u32,
    y: u32,
    catalog: &Catalog,
) -> Result<(), StyleError> {
    for (_, dx, dy) in Direction::CARDINALS {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        let (Ok(nx), Ok(ny)) = (u32::try_from(nx), u32::try_from(ny)) else {
            continue;
        };
        if let Some(neighbour) = source.get(nx, ny) {
            if catalog.find_sheet(neighbour).is_none() {
                return Err(StyleError::SheetNotFound {
                    x: nx,
                    y: ny,
                    sheet: neighbour.sheet_id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Substitute cells in the given visiting order.
///
/// Positions not yielded by `order` stay empty in the output. Stops at the
/// first error.
pub fn substitute_cells<I>(
    source: &TileGrid,
    catalog: &Catalog,
    order: I,
) -> Result<TileGrid, StyleError>
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut output = source.cleared();
    for (x, y) in order {
        output.set(x, y, substitute_cell(source, x, y, catalog)?);
    }
    Ok(output)
}

/// Substitute a whole layer in row-major order
pub fn substitute_layer(source: &TileGrid, catalog: &Catalog) -> Result<TileGrid, StyleError> {
    substitute_cells(source, catalog, source.positions())
}

/// Substitute a whole layer with cells spread over the rayon thread pool.
///
/// Produces the same grid as [`substitute_layer`]. When several cells fail,
/// which error is returned is unspecified.
pub fn substitute_layer_par(source: &TileGrid, catalog: &Catalog) -> Result<TileGrid, StyleError> {
    let width = source.width as usize;
    let cells = (0..source.len())
        .into_par_iter()
        .map(|idx| {
            let x = (idx % width) as u32;
            let y = (idx / width) as u32;
            substitute_cell(source, x, y, catalog)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TileGrid {
        width: source.width,
        height: source.height,
        cells,
    })
}
