use prmap_core::Direction;
use thiserror::Error;

/// Catalog authoring errors surfaced while substituting a cell
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Tile at cell {x}, {y} uses sheet '{sheet}', which is not in the catalog")]
    SheetNotFound { x: u32, y: u32, sheet: String },
    #[error("Sheet '{sheet}' has no style variant for directions [{directions}] (cell {x}, {y})")]
    StyleVariantUndefined {
        x: u32,
        y: u32,
        sheet: String,
        directions: Direction,
    },
    #[error("Sprite set '{set}' has no tile for style '{style}' (cell {x}, {y})")]
    StyleTileUndefined {
        x: u32,
        y: u32,
        set: String,
        style: String,
    },
}
